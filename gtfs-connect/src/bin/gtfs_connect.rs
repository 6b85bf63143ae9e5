use clap::Parser;
use gtfs_connect::app::ConnectApp;

fn main() {
    env_logger::init();
    let app = ConnectApp::parse();
    match app.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running gtfs_connect: {e}");
            std::process::exit(1);
        }
    }
}

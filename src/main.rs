//! main.rs
//! Entry point for jekyll-publisher

use jekyll_publisher::app::DashboardState;
use jekyll_publisher::config::Config;
use jekyll_publisher::core::terminal;
use jekyll_publisher::utils::cli::{CliAction, handle_args};
use jekyll_publisher::utils::init_logging;

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        log::error!("Panic: {}", info);
        eprintln!("\n[jekyll-publisher] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let site_root = match handle_args() {
        CliAction::Run(path) => path,
        CliAction::Exit(code) => std::process::exit(code),
    };

    let config = Config::load();

    if let Err(e) = init_logging(config.general()) {
        eprintln!("[jekyll-publisher] Logging disabled: {}", e);
    }

    let mut app = match DashboardState::from_site(&config, &site_root) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Could not open site {}: {}", site_root.display(), e);
            eprintln!("[jekyll-publisher] Error: {}", e);
            std::process::exit(1);
        }
    };

    terminal::run_terminal(&mut app)
}

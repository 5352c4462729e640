use clap::Parser;
use miette::{IntoDiagnostic, Result};
use warp::cli::{commands, Cli, Mode};
use warp::core::picker::FuzzyPicker;
use warp::core::store::Store;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let Some(mode) = cli.mode() else {
        println!("{}", console::style(" > Use '-h' for options").bold());
        return Ok(());
    };

    let mut store = Store::open().into_diagnostic()?;

    // Run the operation, then commit and close unconditionally, so a
    // confirmed mutation is never lost to a later failure or an abort
    let result = dispatch(mode, &mut store);
    let closed = store.close().into_diagnostic();
    result.and(closed)
}

fn dispatch(mode: Mode, store: &mut Store) -> Result<()> {
    match mode {
        Mode::Add => commands::add::run(store),
        Mode::Connect => commands::connect::run(store, &FuzzyPicker),
        Mode::Delete => commands::delete::run(store),
        Mode::Show => commands::show::run(store),
        Mode::Output => commands::output::run(store),
    }
}

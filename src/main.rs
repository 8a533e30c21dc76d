use anyhow::Result;

fn main() -> Result<()> {
    cc_session_browser::cli::run()
}

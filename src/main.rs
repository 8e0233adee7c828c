use awsdac_rs::cli::args::Cli;
use awsdac_rs::cli::dispatch::handle;

fn main() {
    let cli = Cli::parse_or_exit();
    handle(cli);
}

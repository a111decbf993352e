//! Prints the columns of the catalog table and which one the ratings chart
//! would use.

use backend::error::ReportError;
use backend::report::detector::detect_rating_column;
use backend::report::schema::try_inspect_columns;
use backend::store::Store;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "check-columns", about = "Show the catalog table's columns")]
struct Args {
    #[arg(long, env = "CATALOG_DB", default_value = "people.db")]
    database: PathBuf,

    #[arg(long, env = "CATALOG_TABLE", default_value = "etl_movie_data")]
    table: String,
}

fn run(args: &Args) -> Result<(), ReportError> {
    let store = Store::new(&args.database, &args.table);
    let columns = try_inspect_columns(&store)?;
    if columns.is_empty() {
        println!("table '{}' not found in {:?}", args.table, args.database);
        return Ok(());
    }

    println!("{:>4}  {:<24}  {}", "cid", "name", "type");
    for col in &columns {
        println!("{:>4}  {:<24}  {}", col.position, col.name, col.declared_type);
    }
    match detect_rating_column(&columns) {
        Some(col) => println!("rating column: {}", col.name()),
        None => println!("rating column: none"),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("check-columns: {}", e);
            ExitCode::FAILURE
        }
    }
}

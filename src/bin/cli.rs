use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;

use trivia_api::db::{self, queries, Category, Question};
use trivia_api::settings;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import categories and questions from CSV files
    Import { path: PathBuf },
    /// Export categories and questions to CSV files
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Export { path } => export_data(path).await.expect("Cannot export"),
        Commands::Import { path } => import_data(path).await.expect("Cannot import"),
    }
}

fn write_to(path: PathBuf, data: Vec<impl Serialize>) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(path)?;
    let mut wtr = csv::Writer::from_writer(file);
    for line in data {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_from<T: DeserializeOwned>(path: PathBuf) -> Result<Vec<T>, Box<dyn Error>> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        let record: T = record?;
        out.push(record);
    }
    Ok(out)
}

async fn export_data(path: PathBuf) -> Result<(), Box<dyn Error>> {
    let settings = settings::load()?;
    let pool = db::establish_connection(&settings.db_path)
        .await
        .expect("Unable to connect to database");
    let categories = queries::categories::get_categories(&pool).await?;
    let questions = queries::questions::get_questions(&pool).await?;
    if !path.exists() {
        std::fs::create_dir_all(&path)?
    }
    write_to(path.clone().join("categories.csv"), categories)?;
    write_to(path.clone().join("questions.csv"), questions)?;
    Ok(())
}

async fn import_data(path: PathBuf) -> Result<(), Box<dyn Error>> {
    let settings = settings::load()?;
    let pool = db::establish_connection(&settings.db_path)
        .await
        .expect("Unable to connect to database");
    db::run_migrations(&pool).await?;

    let categories: Vec<Category> = read_from(path.clone().join("categories.csv"))?;
    let questions: Vec<Question> = read_from(path.clone().join("questions.csv"))?;
    queries::categories::import_categories(&pool, categories).await?;
    queries::questions::import_questions(&pool, questions).await?;
    Ok(())
}

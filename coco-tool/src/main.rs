mod config;

use crate::config::Config;
use anyhow::{Context, Result};
use clap::Parser;
use coco_index::{CocoDetection, GenericDataset};
use prettytable::{cell, row, Table};
use std::{env, path::PathBuf};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
/// Inspect a COCO detection dataset
enum Opts {
    /// Print per-class label statistics
    Info {
        /// configuration file
        config_file: PathBuf,
    },
    /// Print the image path and label matrix of a record
    Get {
        /// configuration file
        config_file: PathBuf,
        /// record index
        #[clap(allow_hyphen_values = true)]
        index: i64,
    },
}

fn main() -> Result<()> {
    // setup tracing
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).compact();
    let filter_layer = {
        let filter = EnvFilter::from_default_env();
        if env::var("RUST_LOG").is_err() {
            filter.add_directive(LevelFilter::INFO.into())
        } else {
            filter
        }
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    match Opts::parse() {
        Opts::Info { config_file } => {
            info(config_file)?;
        }
        Opts::Get { config_file, index } => {
            get(config_file, index)?;
        }
    }

    Ok(())
}

fn load_dataset(config_file: PathBuf) -> Result<CocoDetection> {
    let config = Config::open(&config_file)
        .with_context(|| format!("failed to load config file '{}'", config_file.display()))?;
    let mut dataset = config.dataset.to_init().build();
    dataset
        .prepare()
        .with_context(|| format!("failed to prepare the '{}' dataset", dataset.usage()))?;
    Ok(dataset)
}

fn info(config_file: PathBuf) -> Result<()> {
    let dataset = load_dataset(config_file)?;
    let classes = dataset.classes();
    let category_ids = dataset.category_ids()?;
    let records = dataset.records()?;

    let mut label_counts = vec![0usize; classes.len()];
    let mut image_counts = vec![0usize; classes.len()];
    for record in records {
        let mut seen = vec![false; classes.len()];
        for label in &record.labels {
            label_counts[label.class] += 1;
            seen[label.class] = true;
        }
        seen.iter()
            .zip(image_counts.iter_mut())
            .filter(|(&seen, _)| seen)
            .for_each(|(_, count)| *count += 1);
    }

    // print class information
    {
        let mut table = Table::new();
        table.add_row(row!["class", "category id", "name", "labels", "images"]);

        classes
            .iter()
            .zip(category_ids)
            .enumerate()
            .for_each(|(class, (name, category_id))| {
                table.add_row(row![
                    class,
                    category_id,
                    name,
                    label_counts[class],
                    image_counts[class],
                ]);
            });

        table.printstd();
    }

    info!("root: {}", dataset.root()?.display());
    println!(
        "{} records, {} labels, {} classes",
        records.len(),
        label_counts.iter().sum::<usize>(),
        classes.len()
    );

    Ok(())
}

fn get(config_file: PathBuf, index: i64) -> Result<()> {
    let dataset = load_dataset(config_file)?;
    let record = dataset.get(index)?;

    println!("{}", record.image.path.display());
    for [x, y, w, h, class] in record.label_rows() {
        println!("{}\t{}\t{}\t{}\t{}", x, y, w, h, class);
    }

    Ok(())
}

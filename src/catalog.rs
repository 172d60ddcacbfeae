//! Site content bundled into the binary: hero slides, destination cards,
//! filter buttons, package cards and progress goals.
//!
//! Slides and destinations are CSV files compiled in with `include_str!` and
//! parsed once on first access. Rows that fail to deserialize are skipped.

use log::{debug, info};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;

static SLIDES: Lazy<Vec<Slide>> =
    Lazy::new(|| read_slides_from_csv_string(include_str!("slides.csv")).unwrap_or_default());

static DESTINATIONS: Lazy<Vec<Destination>> = Lazy::new(|| {
    read_destinations_from_csv_string(include_str!("destinos.csv")).unwrap_or_default()
});

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub price: f64,
}

/// A button of the destination filter bar: (`data-filter` value, label).
pub type FilterOption = (&'static str, &'static str);

pub const FILTER_OPTIONS: &[FilterOption] = &[
    ("todos", "Todos"),
    ("familia", "Família"),
    ("amigos", "Amigos"),
    ("casais", "Casais"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    /// `data-pacote` value
    pub kind: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const PACKAGES: &[Package] = &[
    Package {
        kind: "amigos",
        name: "Amigos",
        icon: "fas fa-users",
        description: "Hospedagem compartilhada, passeios em grupo e roteiros noturnos.",
    },
    Package {
        kind: "familia",
        name: "Família",
        icon: "fas fa-child",
        description: "Quartos familiares, atividades para crianças e traslados inclusos.",
    },
    Package {
        kind: "casais",
        name: "Casais",
        icon: "fas fa-heart",
        description: "Experiências a dois, jantares especiais e hotéis charmosos.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressGoal {
    pub label: &'static str,
    pub percent: u8,
}

pub const PROGRESS_GOALS: &[ProgressGoal] = &[
    ProgressGoal { label: "Roteiro definido", percent: 75 },
    ProgressGoal { label: "Orçamento aprovado", percent: 60 },
    ProgressGoal { label: "Reservas confirmadas", percent: 40 },
];

pub fn slides() -> &'static [Slide] {
    &SLIDES
}

pub fn destinations() -> &'static [Destination] {
    &DESTINATIONS
}

fn read_records<T: DeserializeOwned>(content: &str) -> Result<Vec<T>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    reader.headers()?;

    let mut records = Vec::new();
    for (i, record) in reader.deserialize::<T>().enumerate() {
        match record {
            Ok(r) => records.push(r),
            // +2: header line plus 1-based numbering
            Err(e) => debug!("Warning: {} on line {}", e, i + 2),
        }
    }
    Ok(records)
}

pub fn read_slides_from_csv_string(
    csv_content: &str,
) -> Result<Vec<Slide>, Box<dyn std::error::Error>> {
    let slides: Vec<Slide> = read_records(csv_content)?;
    info!("Loaded {} slides", slides.len());
    Ok(slides)
}

/// Parse destination cards. Later rows reusing an id are dropped.
pub fn read_destinations_from_csv_string(
    csv_content: &str,
) -> Result<Vec<Destination>, Box<dyn std::error::Error>> {
    let mut seen_ids = HashSet::new();
    let destinations: Vec<Destination> = read_records::<Destination>(csv_content)?
        .into_iter()
        .filter(|d| {
            let fresh = seen_ids.insert(d.id.clone());
            if !fresh {
                debug!("Warning: Duplicate destination id '{}', skipping", d.id);
            }
            fresh
        })
        .collect();
    info!("Loaded {} destinations", destinations.len());
    Ok(destinations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DestinationFilter;

    #[test]
    fn bundled_content_loads() {
        assert!(!slides().is_empty());
        assert!(!destinations().is_empty());
        assert!(destinations()
            .iter()
            .all(|d| FILTER_OPTIONS.iter().any(|(value, _)| *value == d.category)));
    }

    #[test]
    fn skips_bad_rows_and_duplicate_ids() {
        let csv = "id,name,category,image,description,price\n\
                   a,Alpha,familia,a.jpg,First,100\n\
                   b,Beta,amigos,b.jpg,Second,not-a-price\n\
                   a,Again,casais,c.jpg,Dup,300\n\
                   c,Gamma,casais,c.jpg,\"Third, quoted\",250.5\n";
        let parsed = read_destinations_from_csv_string(csv).expect("headers parse");
        let ids: Vec<_> = parsed.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(parsed[1].description, "Third, quoted");
        assert_eq!(parsed[1].price, 250.5);
    }

    #[test]
    fn familia_filter_keeps_only_family_cards() {
        let filter = DestinationFilter::from_attr("familia");
        let shown: Vec<_> = destinations()
            .iter()
            .filter(|d| filter.shows(&d.category))
            .collect();
        assert!(!shown.is_empty());
        assert!(shown.iter().all(|d| d.category == "familia"));

        let all = DestinationFilter::from_attr("todos");
        assert_eq!(
            destinations().iter().filter(|d| all.shows(&d.category)).count(),
            destinations().len()
        );
    }

    #[test]
    fn empty_content_yields_no_slides() {
        let parsed = read_slides_from_csv_string("title,subtitle,image\n").expect("headers parse");
        assert!(parsed.is_empty());
    }
}

//! Seeded synthetic Business Partner data for demos and local runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::Result;

const NAMES: [&str; 7] = [
    "RWE AG",
    "Bosch",
    "Siemens",
    "Chibuike Ikechukwu",
    "Matthew Ikechukwu",
    "Anna Müller",
    "John Doe",
];
const CITIES: [&str; 6] = ["Essen", "Dortmund", "Berlin", "Lagos", "Munich", "Hamburg"];
// DE repeated on purpose to skew the draw
const COUNTRIES: [&str; 7] = ["DE", "DE", "DE", "NG", "DE", "NL", "FR"];

struct Partner {
    bp_id: String,
    bp_type: &'static str,
    name: String,
    email: Option<String>,
    phone: String,
    country: &'static str,
    city: Option<&'static str>,
}

/// Generate `rows` partner records with a fixed seed and write them as
/// CSV. A slice of the data is intentionally messy (trailing spaces, bad
/// emails, short phones, missing cities), and for 10+ rows records 3 and 4
/// form a planted exact/fuzzy duplicate constellation.
pub fn generate_sample_data(rows: usize, out_path: &Path, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut partners: Vec<Partner> = Vec::with_capacity(rows);
    for i in 0..rows {
        let bp_type = if rng.gen_bool(0.5) { "PERSON" } else { "COMPANY" };
        let mut name = NAMES[rng.gen_range(0..NAMES.len())].to_string();
        if rng.gen_bool(0.08) {
            name.push_str("  "); // trailing spaces
        }

        let email = if bp_type == "PERSON" {
            Some(if rng.gen_bool(0.07) {
                "bad-email".to_string()
            } else {
                format!("user{i}@example.com")
            })
        } else {
            None
        };

        let mut phone = format!(
            "0{}{}",
            rng.gen_range(100..1000),
            rng.gen_range(100_000..1_000_000)
        );
        if rng.gen_bool(0.05) {
            phone = "12".to_string(); // too short
        }

        let country = COUNTRIES[rng.gen_range(0..COUNTRIES.len())];
        let city = if rng.gen_bool(0.06) {
            None
        } else {
            Some(CITIES[rng.gen_range(0..CITIES.len())])
        };

        partners.push(Partner {
            bp_id: format!("BP{i:05}"),
            bp_type,
            name,
            email,
            phone,
            country,
            city,
        });
    }

    // Plant a duplicate cluster: record 4 is a fuzzy twin of record 3
    // (double space in the name, same city and country).
    if rows >= 10 {
        let (city, country) = (partners[3].city, partners[3].country);
        partners[3].name = "RWE AG".to_string();
        partners[4].name = "RWE  AG".to_string();
        partners[4].city = city;
        partners[4].country = country;
    }

    let mut dataset = Dataset::new(
        ["bp_id", "bp_type", "name", "email", "phone", "country", "city"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    );
    for p in partners {
        dataset.push_row(vec![
            Some(p.bp_id),
            Some(p.bp_type.to_string()),
            Some(p.name),
            p.email,
            Some(p.phone),
            Some(p.country.to_string()),
            p.city.map(str::to_string),
        ]);
    }
    dataset.to_csv(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn same_seed_is_reproducible() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        generate_sample_data(50, &first, 42).unwrap();
        generate_sample_data(50, &second, 42).unwrap();
        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }

    #[test]
    fn writes_requested_row_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bp.csv");
        generate_sample_data(25, &path, 7).unwrap();
        let dataset = Dataset::from_csv(&path).unwrap();
        assert_eq!(dataset.len(), 25);
        assert_eq!(dataset.columns()[0], "bp_id");
        assert_eq!(dataset.bp_id(0), "BP00000");
    }

    #[test]
    fn plants_duplicate_pair_for_larger_sets() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bp.csv");
        generate_sample_data(20, &path, 42).unwrap();
        let dataset = Dataset::from_csv(&path).unwrap();
        assert_eq!(dataset.value(3, "name"), Some("RWE AG"));
        assert_eq!(dataset.value(4, "name"), Some("RWE  AG"));
        assert_eq!(dataset.value(4, "city"), dataset.value(3, "city"));
        assert_eq!(dataset.value(4, "country"), dataset.value(3, "country"));
    }
}

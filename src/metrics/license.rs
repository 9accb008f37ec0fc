use crate::registry::Lookup;
use crate::types::scoring::Score;

pub const FAILURE_SCORE: Score = 0.0;

pub const OPEN_LICENSES: [&str; 5] = ["mit", "apache-2.0", "bsd", "gpl", "cc"];

pub fn license_score(lookup: &Lookup) -> Score {
    match lookup {
        Lookup::Unconfigured => 0.5,
        Lookup::Unavailable => 0.3,
        Lookup::Found(metadata) => match metadata.license.as_deref() {
            None => 0.5,
            Some(license) if is_open(license) => 0.9,
            Some(_) => 0.6,
        },
    }
}

fn is_open(license: &str) -> bool {
    let license = license.to_lowercase();
    OPEN_LICENSES.iter().any(|open| license.contains(open))
}

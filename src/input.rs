//! Process-set input.
//!
//! Process sets come from a JSON file, from `ID:RUN[:ARRIVAL]` specs on the
//! command line, or from the built-in default set. Loading only parses;
//! integrity checks happen when the base timeline is built.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::InputError;
use crate::models::Process;

/// The built-in process set: three processes of four slots, staggered arrivals.
pub fn default_processes() -> Vec<Process> {
    vec![
        Process::new('A', 4),
        Process::new('B', 4).with_arrival(1),
        Process::new('C', 4).with_arrival(2),
    ]
}

/// Loads a process set from a JSON array file.
///
/// ```json
/// [
///   { "id": "A", "run_length": 4, "arrival_time": 0 },
///   { "id": "B", "run_length": 4, "arrival_time": 1 }
/// ]
/// ```
pub fn load_processes(path: &Path) -> Result<Vec<Process>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}

impl FromStr for Process {
    type Err = InputError;

    /// Parses `ID:RUN` or `ID:RUN:ARRIVAL`, e.g. `B:4:1`.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let bad = |reason: &str| InputError::BadSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
        let (id, run, arrival) = match parts.as_slice() {
            [id, run] => (*id, *run, "0"),
            [id, run, arrival] => (*id, *run, *arrival),
            _ => return Err(bad("expected ID:RUN or ID:RUN:ARRIVAL")),
        };

        let mut chars = id.chars();
        let id = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(bad("id must be a single character")),
        };
        let run_length: u32 = run.parse().map_err(|_| bad("run length is not an integer"))?;
        let arrival_time: i64 = arrival
            .parse()
            .map_err(|_| bad("arrival time is not an integer"))?;

        Ok(Process::new(id, run_length).with_arrival(arrival_time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_full_spec() {
        let p: Process = "B:4:1".parse().unwrap();
        assert_eq!(p, Process::new('B', 4).with_arrival(1));
    }

    #[test]
    fn test_parse_default_arrival() {
        let p: Process = "A:2".parse().unwrap();
        assert_eq!(p, Process::new('A', 2));
    }

    #[test]
    fn test_parse_negative_arrival_is_deferred_to_validation() {
        let p: Process = "A:1:-1".parse().unwrap();
        assert_eq!(p.arrival_time, -1);
    }

    #[test]
    fn test_parse_errors() {
        for spec in ["", "A", "AB:1", "A:x", "A:1:y", "A:1:2:3", "A:-1"] {
            assert!(spec.parse::<Process>().is_err(), "{spec} should fail");
        }
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir().join(format!("u-interleave-{}.json", std::process::id()));
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            r#"[{{"id":"A","run_length":2,"arrival_time":0}},{{"id":"B","run_length":1,"arrival_time":1}}]"#
        )
        .unwrap();
        drop(f);

        let ps = load_processes(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            ps,
            vec![Process::new('A', 2), Process::new('B', 1).with_arrival(1)]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_processes(Path::new("/nonexistent/processes.json")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn test_default_set() {
        let ps = default_processes();
        assert_eq!(ps.len(), 3);
        assert_eq!(ps[2].arrival_time, 2);
    }
}

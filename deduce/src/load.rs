//! Loading of problems in JSON format.

use crate::Error;
use log::info;
use modus::raw::RawHyp;
use modus::SHyp;
use std::convert::TryFrom;
use std::path::{Path, PathBuf};

pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<SHyp>, Error> {
    let raw: Vec<RawHyp> = serde_json::from_slice(bytes)?;
    let hyps = raw.into_iter().map(|h| -> Result<SHyp, Error> {
        let h = SHyp::try_from(h)?;
        info!("hypothesis: {}", h);
        Ok(h)
    });
    hyps.collect()
}

fn read_file(filename: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(filename).or_else(|e| {
        let dir = std::env::var("PROBLEMS").or(Err(e))?;
        let mut path = PathBuf::from(dir);
        path.push(filename);
        std::fs::read(path)
    })
}

pub fn parse_file(filename: &Path) -> Result<Vec<SHyp>, Error> {
    info!("loading {:?}", filename);
    let bytes = read_file(filename)?;
    parse_bytes(&bytes)
}

#[test]
fn errors() {
    use modus::status::NoSuccessKind::{self, InputError, SyntaxError};
    let kind = |json: &str| -> Option<NoSuccessKind> {
        let e = parse_bytes(json.as_bytes()).err()?;
        Some(match e.get_kind() {
            SyntaxError => SyntaxError,
            InputError => InputError,
            k => panic!("unexpected {:?}", k),
        })
    };

    assert_eq!(kind(r#"[{"operand1": {"value": "p"}"#), Some(SyntaxError));
    assert_eq!(kind(r#"[{"operand1": {"value": "p"}, "no": true}]"#), Some(SyntaxError));
    assert_eq!(kind(r#"[{"operand1": {"value": "p"}, "operator": "=>"}]"#), Some(InputError));
    assert_eq!(kind("[]"), None);
}

#[test]
fn problems_dir() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/problems");
    let name = Path::new("exo1.json");
    assert!(!name.exists());
    std::env::set_var("PROBLEMS", dir);
    let hyps = parse_file(name).map_err(|e| e.get_error().as_ref().map(|e| e.to_string()));
    assert_eq!(hyps.map(|h| h.len()), Ok(3));
}

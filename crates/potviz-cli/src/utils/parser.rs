use potviz::core::potentials::PotentialKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Unknown potential '{0}'. Expected one of: bond, angle, torsion, improper, vdw, electrostatic, morse."
    )]
    UnknownPotential(String),

    #[error("Potential name cannot be empty.")]
    Empty,
}

pub fn parse_potential_kind(name: &str) -> Result<PotentialKind, ParseError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::Empty);
    }
    PotentialKind::from_name(name).ok_or_else(|| ParseError::UnknownPotential(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_parse() {
        for kind in PotentialKind::ALL {
            assert_eq!(parse_potential_kind(kind.name()), Ok(kind));
        }
    }

    #[test]
    fn aliases_and_case_are_accepted() {
        assert_eq!(
            parse_potential_kind(" Lennard-Jones "),
            Ok(PotentialKind::VanDerWaals)
        );
        assert_eq!(parse_potential_kind("COULOMB"), Ok(PotentialKind::Electrostatic));
    }

    #[test]
    fn unknown_and_empty_names_are_rejected() {
        assert_eq!(
            parse_potential_kind("buckingham"),
            Err(ParseError::UnknownPotential("buckingham".to_string()))
        );
        assert_eq!(parse_potential_kind("  "), Err(ParseError::Empty));
    }
}

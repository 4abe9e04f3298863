use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use linalg::DEFAULT_SYMPREC;
use log::warn;
use symops::DetectOptions;

use crate::error::SymmetryError;

/// Options of a symmetry run, read from `key = value` lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    symprec: f64,
    angle_tolerance: f64, // degrees; negative derives it from symprec
    validate_group: bool,
    parallel: bool,
    conventional: bool, // also refine to the standard conventional cell
}

impl Default for Control {
    fn default() -> Self {
        Control {
            symprec: DEFAULT_SYMPREC,
            angle_tolerance: -1.0,
            validate_group: true,
            parallel: true,
            conventional: false,
        }
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, line: usize) -> Result<T, SymmetryError> {
    value.parse().map_err(|_| SymmetryError::InvalidInput {
        reason: format!("line {}: cannot parse '{}' for {}", line, value, key),
    })
}

impl Control {
    pub fn new() -> Control {
        Control::default()
    }

    pub fn get_symprec(&self) -> f64 {
        self.symprec
    }

    pub fn get_angle_tolerance(&self) -> f64 {
        self.angle_tolerance
    }

    pub fn get_validate_group(&self) -> bool {
        self.validate_group
    }

    pub fn get_parallel(&self) -> bool {
        self.parallel
    }

    pub fn get_conventional(&self) -> bool {
        self.conventional
    }

    pub fn detect_options(&self) -> DetectOptions {
        let tol = linalg::Tolerance::with_angle_tolerance(self.symprec, self.angle_tolerance);
        DetectOptions {
            validate_group: self.validate_group,
            parallel: self.parallel,
            ..DetectOptions::from_tolerance(&tol)
        }
    }

    pub fn read_file<P: AsRef<Path>>(inpfile: P) -> Result<Control, SymmetryError> {
        let path = inpfile.as_ref();
        let file = File::open(path).map_err(|e| SymmetryError::InvalidInput {
            reason: format!("cannot open {}: {}", path.display(), e),
        })?;
        let lines: Vec<String> = BufReader::new(file)
            .lines()
            .collect::<Result<_, _>>()
            .map_err(|e| SymmetryError::InvalidInput {
                reason: format!("cannot read {}: {}", path.display(), e),
            })?;
        Control::parse_lines(lines.iter().map(|s| s.as_str()))
    }

    pub fn parse_str(text: &str) -> Result<Control, SymmetryError> {
        Control::parse_lines(text.lines())
    }

    fn parse_lines<'a, I: Iterator<Item = &'a str>>(lines: I) -> Result<Control, SymmetryError> {
        let mut control = Control::default();
        let mut invalid: Vec<String> = Vec::new();

        for (iline, line) in lines.enumerate() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let s: Vec<&str> = line.split('=').map(|x| x.trim()).collect();
            if s.len() != 2 {
                invalid.push(line.to_string());
                continue;
            }

            let n = iline + 1;
            match s[0] {
                "symprec" => {
                    control.symprec = parse_value(s[0], s[1], n)?;
                }

                "angle_tolerance" => {
                    control.angle_tolerance = parse_value(s[0], s[1], n)?;
                }

                "validate_group" => {
                    control.validate_group = parse_value(s[0], s[1], n)?;
                }

                "parallel" => {
                    control.parallel = parse_value(s[0], s[1], n)?;
                }

                "conventional" => {
                    control.conventional = parse_value(s[0], s[1], n)?;
                }

                _ => {
                    warn!("unknown parameter : {}", line);
                    invalid.push(line.to_string());
                }
            }
        }

        if !invalid.is_empty() {
            return Err(SymmetryError::InvalidInput {
                reason: format!("unknown parameters: {}", invalid.join("; ")),
            });
        }
        if !(control.symprec > 0.0 && control.symprec.is_finite()) {
            return Err(SymmetryError::NonPositiveTolerance {
                symprec: control.symprec,
            });
        }

        Ok(control)
    }

    pub fn display(&self) {
        const OUT_WIDTH1: usize = 28;
        const OUT_WIDTH2: usize = 18;

        println!("   {:-^80}", " symmetry parameters ");
        println!();

        println!(
            "   {:<width1$} = {:>width2$.3E}",
            "symprec",
            self.symprec,
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );
        println!(
            "   {:<width1$} = {:>width2$}",
            "angle_tolerance",
            self.angle_tolerance,
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );
        println!(
            "   {:<width1$} = {:>width2$}",
            "validate_group",
            self.validate_group,
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );
        println!(
            "   {:<width1$} = {:>width2$}",
            "parallel",
            self.parallel,
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );
        println!(
            "   {:<width1$} = {:>width2$}",
            "conventional",
            self.conventional,
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let control = Control::new();
        assert_eq!(control.get_symprec(), DEFAULT_SYMPREC);
        let options = control.detect_options();
        assert_eq!(options.angle_tolerance, None);
        assert!(options.validate_group);
        assert!(!control.get_conventional());
    }

    #[test]
    fn test_parse_str() {
        let text = "
            # tighter search
            symprec = 1.0e-3
            angle_tolerance = 2.5
            parallel = false   # single thread
            conventional = true
        ";
        let control = Control::parse_str(text).unwrap();
        assert_eq!(control.get_symprec(), 1.0e-3);
        assert!(!control.get_parallel());
        assert!(control.get_conventional());
        let options = control.detect_options();
        assert_eq!(options.symprec, 1.0e-3);
        assert_eq!(options.angle_tolerance, Some(2.5));
        assert!(!options.parallel);
    }

    #[test]
    fn test_bad_input() {
        assert!(matches!(
            Control::parse_str("ecut_wfc = 30"),
            Err(SymmetryError::InvalidInput { .. })
        ));
        assert!(matches!(
            Control::parse_str("symprec = small"),
            Err(SymmetryError::InvalidInput { .. })
        ));
        assert!(matches!(
            Control::parse_str("symprec = -1.0"),
            Err(SymmetryError::NonPositiveTolerance { .. })
        ));
    }

    #[test]
    fn test_read_file() {
        let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("src/in.ctrl");
        let control = Control::read_file(&path).unwrap();
        assert_eq!(control.get_symprec(), 1.0e-4);
        assert!(control.get_conventional());
        assert!(Control::read_file("does/not/exist").is_err());
    }
}

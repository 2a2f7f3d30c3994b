//! Parameter files in, SVG and CSV out.

use crate::error::{AppError, AppResult};
use crate::view::{AirfoilScene, SceneStyle, render_svg};
use aero_core::{ParamsPatch, SimParams, SimResponse};
use std::fmt::Write as _;
use std::path::Path;

/// Load a parameter file (YAML, or JSON by `.json` extension) and merge it
/// onto the defaults. Fields missing from the file keep their default.
pub fn load_params(path: &Path) -> AppResult<SimParams> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ParamsFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let patch: ParamsPatch = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    Ok(SimParams::default().merged(patch))
}

/// `x,y,cp` table, one row per surface point.
pub fn cp_table_csv(data: &SimResponse) -> String {
    let mut out = String::from("x,y,cp\n");
    for (x, y, cp) in data.points() {
        let _ = writeln!(out, "{x},{y},{cp}");
    }
    out
}

pub fn write_csv(path: &Path, data: &SimResponse) -> AppResult<()> {
    write_file(path, &cp_table_csv(data))
}

/// Render the airfoil view with the header line as its title.
pub fn write_svg(path: &Path, params: &SimParams, data: &SimResponse) -> AppResult<()> {
    let scene = AirfoilScene::build(data, &SceneStyle::default());
    let header = crate::format::header_line(params, data);
    write_file(path, &render_svg(&scene, Some(&header)))
}

fn write_file(path: &Path, content: &str) -> AppResult<()> {
    std::fs::write(path, content).map_err(|e| AppError::ExportWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> SimResponse {
        SimResponse {
            cp: vec![1.0, -0.25],
            xc: vec![0.0, 0.5],
            yc: vec![0.0, 0.06],
            cl: 0.1,
            gamma: 0.05,
            chord: 1.0,
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("aero-app-{}-{name}", std::process::id()))
    }

    #[test]
    fn csv_has_header_and_rows() {
        assert_eq!(cp_table_csv(&data()), "x,y,cp\n0,0,1\n0.5,0.06,-0.25\n");
    }

    #[test]
    fn yaml_params_merge_onto_defaults() {
        let path = temp_path("params.yaml");
        std::fs::write(&path, "shape: naca2412\naoa_deg: -2.5\n").unwrap();
        let params = load_params(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(params.shape.as_str(), "naca2412");
        assert_eq!(params.aoa_deg, -2.5);
        assert_eq!(params.npts, 300);
        assert_eq!(params.velocity, 10.0);
    }

    #[test]
    fn json_params_by_extension() {
        let path = temp_path("params.json");
        std::fs::write(&path, r#"{"velocity": 25.0, "npts": 160}"#).unwrap();
        let params = load_params(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(params.velocity, 25.0);
        assert_eq!(params.npts, 160);
    }

    #[test]
    fn missing_params_file_names_path() {
        let path = temp_path("does-not-exist.yaml");
        let err = load_params(&path).unwrap_err();
        assert!(matches!(err, AppError::ParamsFileRead { .. }));
    }

    #[test]
    fn svg_export_writes_header() {
        let path = temp_path("view.svg");
        write_svg(&path, &SimParams::default(), &data()).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(svg.contains("Airfoil: NACA0012 | AoA 5.0° | Cl 0.100"));
    }
}

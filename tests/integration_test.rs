use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const ALL_ASSETS: usize = 21 + 1 + 6;

/// Runs `asset-gen -o <tmp> --seed 9 --manifest <tmp>/assets.json` and checks
/// every file the app expects is present with the documented size.
#[test]
fn test_full_generation_with_manifest() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("drawable");
    let manifest_path = temp_dir.path().join("assets.json");

    let output = Command::new(env!("CARGO_BIN_EXE_asset-gen"))
        .arg("-o")
        .arg(&output_dir)
        .arg("--seed")
        .arg("9")
        .arg("--manifest")
        .arg(&manifest_path)
        .output()
        .expect("Failed to run asset-gen command");

    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("asset-gen command failed");
    }

    let expected_sizes = [
        ("ic_genre_techno", 16, 16),
        ("ic_genre_custom", 16, 16),
        ("ic_fixture_moving_head", 16, 16),
        ("ic_nav_heart", 16, 16),
        ("ic_status_live", 16, 16),
        ("mascot_sprites", 96, 64),
        ("logo_assembled", 32, 32),
        ("logo_scattered", 32, 32),
        ("scan_wire", 16, 16),
        ("scan_node", 16, 16),
        ("scan_grid", 16, 16),
        ("scan_highlight", 16, 16),
    ];
    for (name, width, height) in expected_sizes {
        assert_dimensions(&output_dir.join(format!("{name}.png")), width, height);
    }

    let png_count = std::fs::read_dir(&output_dir)
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .map_or(false, |ext| ext == "png")
        })
        .count();
    assert_eq!(png_count, ALL_ASSETS);

    // Manifest agrees with what is on disk
    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&manifest_path).unwrap())
            .expect("Manifest should contain valid JSON");
    let assets = manifest["assets"].as_array().unwrap();
    assert_eq!(assets.len(), ALL_ASSETS);
    assert_eq!(manifest["info"]["version"], 1);

    for asset in assets {
        let filename = asset["filename"].as_str().unwrap();
        let img = image::open(output_dir.join(filename)).unwrap();
        assert_eq!(asset["width"], img.width(), "{filename}");
        assert_eq!(asset["height"], img.height(), "{filename}");
    }

    let sheet = assets
        .iter()
        .find(|a| a["name"] == "mascot_sprites")
        .expect("Sprite sheet in manifest");
    assert_eq!(sheet["frames"].as_array().unwrap().len(), 24);
}

#[test]
fn test_generator_flags_limit_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let status = Command::new(env!("CARGO_BIN_EXE_asset-gen"))
        .arg("--mascot")
        .arg("-o")
        .arg(temp_dir.path())
        .status()
        .expect("Failed to run asset-gen command");
    assert!(status.success());

    let names: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["mascot_sprites.png".to_string()]);
}

#[test]
fn test_bad_font_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let font = temp_dir.path().join("bad.ttf");
    std::fs::write(&font, b"nope").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_asset-gen"))
        .arg("--icons")
        .arg("--font")
        .arg(&font)
        .arg("-o")
        .arg(temp_dir.path().join("out"))
        .output()
        .expect("Failed to run asset-gen command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("font"));
}

#[test]
fn test_bad_font_is_fatal_without_icons() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let font = temp_dir.path().join("bad.ttf");
    std::fs::write(&font, b"nope").unwrap();
    let out = temp_dir.path().join("out");

    let output = Command::new(env!("CARGO_BIN_EXE_asset-gen"))
        .arg("--mascot")
        .arg("--font")
        .arg(&font)
        .arg("-o")
        .arg(&out)
        .output()
        .expect("Failed to run asset-gen command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("font"));
    assert!(!out.join("mascot_sprites.png").exists());
}

fn assert_dimensions(path: &Path, width: u32, height: u32) {
    assert!(path.exists(), "Missing asset: {}", path.display());
    let img = image::open(path).expect("Failed to load generated asset");
    assert_eq!(img.width(), width, "{} width", path.display());
    assert_eq!(img.height(), height, "{} height", path.display());
}

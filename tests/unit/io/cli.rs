//! Tests for command-line parsing and command execution

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use patternfit::MaskChannel;
    use patternfit::io::cli::{
        Cli, Command, CommandRunner, default_output_path, preset_output_path,
    };
    use patternfit::io::configuration::{DEFAULT_SHADOW, DEFAULT_TILE_SCALE};
    use std::fs;
    use std::path::{Path, PathBuf};

    fn write_inputs(dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
        let base = dir.join("model.png");
        let mask = dir.join("mask.png");
        let pattern = dir.join("pattern.png");
        RgbImage::from_pixel(24, 16, Rgb([128, 128, 128]))
            .save(&base)
            .expect("save base");
        GrayImage::from_fn(24, 16, |x, _| Luma([if x < 12 { 0 } else { 255 }]))
            .save(&mask)
            .expect("save mask");
        RgbImage::from_pixel(8, 8, Rgb([255, 0, 0]))
            .save(&pattern)
            .expect("save pattern");
        (base, mask, pattern)
    }

    // Tests apply parsing with only the required paths
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_apply_minimal() {
        let cli = Cli::parse_from(["program", "apply", "base.jpg", "mask.png", "pattern.png"]);

        assert!(!cli.quiet);
        match cli.command {
            Command::Apply {
                base,
                output,
                params,
                ..
            } => {
                assert_eq!(base, PathBuf::from("base.jpg"));
                assert!(output.is_none());
                assert!((params.shadow - DEFAULT_SHADOW).abs() < f32::EPSILON);
                assert_eq!(params.tile_scale, DEFAULT_TILE_SCALE);
                assert_eq!(params.mask_channel, MaskChannel::Luminance);
            }
            _ => unreachable!("Expected apply command"),
        }
    }

    // Tests every apply flag including a negative number
    #[test]
    fn test_cli_parse_apply_all_args() {
        let cli = Cli::parse_from([
            "program",
            "apply",
            "b.png",
            "m.png",
            "p.png",
            "--output",
            "out.png",
            "--shadow",
            "-0.5",
            "--color-boost",
            "2.25",
            "--contrast",
            "1",
            "-t",
            "5",
            "--mask-channel",
            "alpha",
            "-q",
        ]);

        assert!(cli.quiet);
        assert!(!cli.should_show_progress());
        match cli.command {
            Command::Apply { output, params, .. } => {
                assert_eq!(output, Some(PathBuf::from("out.png")));
                assert!((params.shadow + 0.5).abs() < f32::EPSILON);
                assert!((params.color_boost - 2.25).abs() < f32::EPSILON);
                assert!((params.contrast - 1.0).abs() < f32::EPSILON);
                assert_eq!(params.tile_scale, 5);
                assert_eq!(params.mask_channel, MaskChannel::Alpha);
                assert_eq!(params.outside_typical_range(), vec!["shadow"]);
            }
            _ => unreachable!("Expected apply command"),
        }
    }

    // Tests batch parsing of filter and skip flags
    #[test]
    fn test_cli_parse_batch() {
        let cli = Cli::parse_from([
            "program", "batch", "presets", "p.png", "--preset", "look1", "--no-skip",
        ]);

        match cli.command {
            Command::Batch {
                root,
                preset,
                no_skip,
                output,
                ..
            } => {
                assert_eq!(root, PathBuf::from("presets"));
                assert_eq!(preset.as_deref(), Some("look1"));
                assert!(no_skip);
                assert!(output.is_none());
            }
            _ => unreachable!("Expected batch command"),
        }
    }

    // Tests output naming for single and batch runs
    #[test]
    fn test_output_paths() {
        assert_eq!(
            default_output_path(Path::new("photos/model.jpg")),
            PathBuf::from("photos/model_result.png")
        );
        assert_eq!(
            preset_output_path(Path::new("out"), "look1"),
            PathBuf::from("out/look1_result.png")
        );
    }

    // Tests defaults raise no range warnings
    #[test]
    fn test_defaults_within_typical_range() {
        let cli = Cli::parse_from(["program", "apply", "b.png", "m.png", "p.png"]);
        if let Command::Apply { params, .. } = cli.command {
            assert!(params.outside_typical_range().is_empty());
            assert!(params.params().validate().is_ok());
        }
    }

    // Tests apply writes the composite next to the base image
    // Verified by skipping the save step
    #[test]
    fn test_run_apply_writes_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (base, mask, pattern) = write_inputs(dir.path());

        let cli = Cli::parse_from([
            Path::new("program"),
            Path::new("apply"),
            base.as_path(),
            mask.as_path(),
            pattern.as_path(),
            Path::new("-q"),
        ]);
        CommandRunner::new(cli).run().expect("apply");

        let output = dir.path().join("model_result.png");
        let result = image::open(&output).expect("output").to_rgb8();
        assert_eq!(result.dimensions(), (24, 16));
        assert_eq!(result.get_pixel(0, 0).0, [128, 128, 128]);
    }

    // Tests apply refuses invalid parameters before touching files
    #[test]
    fn test_run_apply_invalid_params() {
        let cli = Cli::parse_from([
            "program",
            "apply",
            "missing_base.png",
            "missing_mask.png",
            "missing_pattern.png",
            "--color-boost",
            "0",
            "-q",
        ]);
        let result = CommandRunner::new(cli).run();
        assert!(matches!(
            result,
            Err(patternfit::CompositeError::InvalidParameter { .. })
        ));
    }

    // Tests batch writes one result per preset and skips existing outputs
    // Verified by inverting the skip check
    #[test]
    fn test_run_batch_skips_existing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let root = dir.path();
        fs::create_dir(root.join("models")).expect("models dir");
        fs::create_dir(root.join("masks")).expect("masks dir");
        let (base, mask, pattern) = write_inputs(root);
        for id in ["look1", "look2"] {
            fs::copy(&base, root.join("models").join(format!("{id}.png"))).expect("copy base");
            fs::copy(&mask, root.join("masks").join(format!("{id}.png"))).expect("copy mask");
        }

        let out_dir = root.join("out");
        let existing = out_dir.join("look2_result.png");
        fs::create_dir(&out_dir).expect("out dir");
        fs::write(&existing, b"keep").expect("existing output");

        let cli = Cli::parse_from([
            Path::new("program"),
            Path::new("batch"),
            root,
            pattern.as_path(),
            Path::new("--output"),
            out_dir.as_path(),
            Path::new("--quiet"),
        ]);
        CommandRunner::new(cli).run().expect("batch");

        assert!(out_dir.join("look1_result.png").exists());
        assert_eq!(fs::read(&existing).expect("read"), b"keep");
    }

    // Tests an unknown preset identifier is an error
    #[test]
    fn test_run_batch_unknown_preset() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::create_dir(dir.path().join("models")).expect("models dir");
        fs::create_dir(dir.path().join("masks")).expect("masks dir");

        let cli = Cli::parse_from([
            Path::new("program"),
            Path::new("batch"),
            dir.path(),
            Path::new("pattern.png"),
            Path::new("--preset"),
            Path::new("nope"),
            Path::new("-q"),
        ]);
        assert!(CommandRunner::new(cli).run().is_err());
    }

    // Tests a batch over models sharing a stem fails before writing anything
    // Verified by letting both presets target the same output file
    #[test]
    fn test_run_batch_duplicate_stems() {
        let dir = tempfile::tempdir().expect("temp dir");
        let root = dir.path();
        fs::create_dir(root.join("models")).expect("models dir");
        fs::create_dir(root.join("masks")).expect("masks dir");
        let (base, mask, pattern) = write_inputs(root);
        fs::copy(&base, root.join("models").join("look.png")).expect("copy base");
        fs::copy(&base, root.join("models").join("look.jpg")).expect("copy base");
        fs::copy(&mask, root.join("masks").join("m1.png")).expect("copy mask");
        fs::copy(&mask, root.join("masks").join("m2.png")).expect("copy mask");

        let out_dir = root.join("out");
        let cli = Cli::parse_from([
            Path::new("program"),
            Path::new("batch"),
            root,
            pattern.as_path(),
            Path::new("-o"),
            out_dir.as_path(),
            Path::new("-q"),
        ]);

        assert!(matches!(
            CommandRunner::new(cli).run(),
            Err(patternfit::CompositeError::InvalidSourceData { .. })
        ));
        assert!(!out_dir.join("look_result.png").exists());
    }
}

use proptest::prelude::*;
use slug_squeeze::processing::scaled_bounds;
use slug_squeeze::scanner::is_jpeg_file;
use slug_squeeze::utils::round2;
use slug_squeeze::{generate_output_name, validate_slug, CompressionOptions};
use std::path::Path;

proptest! {
    #[test]
    fn output_name_is_padded_index_slug_jpg(index in 1usize..1000, slug in "[a-z0-9-]{1,40}") {
        let name = generate_output_name(index, &slug);
        let expected_index = if index < 10 { format!("0{}", index) } else { index.to_string() };

        prop_assert_eq!(name, format!("{}-{}.jpg", expected_index, slug));
    }

    #[test]
    fn output_name_index_prefix_parses_back(index in 1usize..10_000) {
        let name = generate_output_name(index, "slug");
        let prefix = name.split('-').next().unwrap();

        prop_assert!(prefix.len() >= 2);
        prop_assert_eq!(prefix.parse::<usize>().unwrap(), index);
    }

    #[test]
    fn valid_slugs_round_trip(slug in "[a-z0-9-]{1,40}") {
        prop_assert_eq!(validate_slug(&format!("  {}  ", slug)).unwrap(), slug);
    }

    #[test]
    fn slugs_with_other_characters_rejected(
        prefix in "[a-z]{0,5}",
        bad in "[A-Z_./]",
        suffix in "[a-z]{0,5}"
    ) {
        let slug = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(validate_slug(&slug).is_err());
    }

    #[test]
    fn target_size_validation(target in 0u64..10_000) {
        let result = CompressionOptions::new(Some(target));
        prop_assert_eq!(result.is_ok(), target > 0);
    }

    #[test]
    fn scaled_bounds_never_enlarge(
        width in 1u32..10_000,
        height in 1u32..10_000,
        scale in 0.01f64..=1.0
    ) {
        let (w, h) = scaled_bounds(width, height, scale);
        prop_assert!(w >= 1 && w <= width);
        prop_assert!(h >= 1 && h <= height);
    }

    #[test]
    fn jpeg_extension_case_insensitive(stem in "[a-z0-9]{1,12}", ext in "[jJ][pP][eE]?[gG]") {
        let file_name = format!("{}.{}", stem, ext);
        prop_assert!(is_jpeg_file(Path::new(&file_name)));
    }

    #[test]
    fn other_extensions_rejected(stem in "[a-z0-9]{1,12}", ext in "(png|gif|txt|json|webp|heic)") {
        let file_name = format!("{}.{}", stem, ext);
        prop_assert!(!is_jpeg_file(Path::new(&file_name)));
    }
}

#[test]
fn resize_scale_sequence_is_strictly_decreasing() {
    let options = CompressionOptions::default();
    let mut scales = Vec::new();
    let mut scale = options.resize_scale_step;
    while scale >= options.min_resize_scale {
        scales.push(scale);
        scale = round2(scale * options.resize_scale_step);
    }

    assert_eq!(
        scales,
        vec![0.8, 0.64, 0.51, 0.41, 0.33, 0.26, 0.21, 0.17, 0.14, 0.11]
    );
    assert!(scales.windows(2).all(|pair| pair[1] < pair[0]));
}

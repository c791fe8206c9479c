use pixgene::data::ImageCodec;
use pixgene::engines::generation::Genome;
use pixgene::types::Rgb;
use pixgene::PixgeneError;

#[test]
fn test_png_save_then_load_keeps_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out/genome.png");

    let mut genome = Genome::new(3, 2);
    genome.set(0, 0, Rgb::new(255, 0, 0));
    genome.set(2, 1, Rgb::new(12, 34, 56));

    ImageCodec::save(&path, &genome).unwrap();
    let loaded = ImageCodec::load(&path).unwrap();

    assert_eq!(loaded.dimensions(), (3, 2));
    assert_eq!(loaded, genome);
}

#[test]
fn test_load_drops_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgba.png");
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 0]));
    img.save(&path).unwrap();

    let genome = ImageCodec::load(&path).unwrap();
    assert_eq!(genome.get(1, 1), Rgb::new(10, 20, 30));
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ImageCodec::load(dir.path().join("absent.png")).unwrap_err();
    assert!(matches!(err, PixgeneError::ImageLoad { .. }));
}

#[test]
fn test_undecodable_file_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"not an image").unwrap();
    assert!(matches!(
        ImageCodec::load(&path),
        Err(PixgeneError::ImageLoad { .. })
    ));
}

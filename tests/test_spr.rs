use fruit_dodge::spr::*;

#[test]
fn parses_rows_and_transparency() {
    let img = SprImage::parse("16711680 -1 \n0 65280 \n").unwrap();
    assert_eq!((img.width, img.height), (2, 2));
    assert_eq!(img.pixel(0, 0), Some(0xFF0000));
    assert_eq!(img.pixel(1, 0), None);
    assert_eq!(img.pixel(0, 1), Some(0));
    assert_eq!(img.pixel(1, 1), Some(0x00FF00));
    assert_eq!(img.pixel(2, 0), None);
}

#[test]
fn blank_lines_are_skipped() {
    let img = SprImage::parse("\n1 2 3\n\n4 5 6\n\n").unwrap();
    assert_eq!((img.width, img.height), (3, 2));
}

#[test]
fn ragged_rows_are_rejected() {
    match SprImage::parse("1 2 3\n4 5\n") {
        Err(SprError::RaggedRow {
            line,
            expected,
            found,
        }) => assert_eq!((line, expected, found), (2, 3, 2)),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn bad_tokens_are_rejected() {
    assert!(matches!(
        SprImage::parse("1 x 3\n"),
        Err(SprError::BadToken { line: 1, .. })
    ));
    assert!(matches!(
        SprImage::parse("16777216\n"),
        Err(SprError::BadToken { .. })
    ));
    assert!(matches!(SprImage::parse("   \n"), Err(SprError::Empty)));
}

#[test]
fn sample_is_nearest_neighbour() {
    let img = SprImage::parse("1 2\n3 4\n").unwrap();
    assert_eq!(img.sample(0.1, 0.1), Some(1));
    assert_eq!(img.sample(0.9, 0.1), Some(2));
    assert_eq!(img.sample(0.1, 0.9), Some(3));
    assert_eq!(img.sample(0.75, 0.75), Some(4));
    assert_eq!(img.sample(1.0, 0.5), None);
    assert_eq!(img.sample(-0.1, 0.5), None);
}

#[test]
fn rgb_unpacks_channels() {
    assert_eq!(rgb(0x12_34_56), (0x12, 0x34, 0x56));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_sprite.spr");
    assert!(matches!(SprImage::load(&path), Err(SprError::Io(_))));
}

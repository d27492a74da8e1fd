use std::path::PathBuf;

use fruit_dodge::config::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn defaults_without_environment() {
    let cfg = GameConfig::from_lookup(lookup(&[]));
    assert_eq!(cfg, GameConfig::default());
    assert_eq!(cfg.history_path, PathBuf::from("playerTimeFile.txt"));
    assert_eq!(cfg.spawn_area, SpawnArea::Raw);
    assert_eq!(cfg.sprite_dir, None);
}

#[test]
fn environment_overrides() {
    let cfg = GameConfig::from_lookup(lookup(&[
        ("FRUIT_DODGE_HISTORY", "/tmp/times.txt"),
        ("FRUIT_DODGE_SPRITES", "assets/sprites"),
        ("FRUIT_DODGE_SPAWN", "Screen"),
    ]));
    assert_eq!(cfg.history_path, PathBuf::from("/tmp/times.txt"));
    assert_eq!(cfg.sprite_dir, Some(PathBuf::from("assets/sprites")));
    assert_eq!(cfg.spawn_area, SpawnArea::Screen);
}

#[test]
fn unknown_spawn_area_keeps_default() {
    let cfg = GameConfig::from_lookup(lookup(&[("FRUIT_DODGE_SPAWN", "everywhere")]));
    assert_eq!(cfg.spawn_area, SpawnArea::Raw);
}

use crate::font::FontHandle;
use crate::input::{InputState, Key};
use crate::world::level::{Layer, Layout, Level, LevelSetting};

const DEJAVU: &[u8] = include_bytes!("../../test-assets/dejavu-sans-mono.ttf");

pub(crate) fn test_font() -> FontHandle {
    FontHandle::new(DEJAVU.to_vec()).unwrap()
}

pub(crate) fn holding(keys: &[Key]) -> InputState {
    let mut input = InputState::new();
    for &k in keys {
        input.press(k);
    }
    input
}

pub(crate) fn layout(fg: &[&str], player: &[&str], coin: &[&str]) -> Layout {
    let mut l = Layout::new();
    l.layer(Layer::Foreground, fg.iter().copied())
        .layer(Layer::Player, player.iter().copied())
        .layer(Layer::Coin, coin.iter().copied());
    l
}

pub(crate) fn level(fg: &[&str], player: &[&str], coin: &[&str]) -> Level {
    Level::new(&layout(fg, player, coin), &LevelSetting::new()).unwrap()
}

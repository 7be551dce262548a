const FILLED: char = '★';
const EMPTY: char = '☆';
const SCALE: u8 = 5;

/// Five-slot star bar, e.g. `★★★★☆` for 4
pub fn stars(rating: u8) -> String {
    let filled = rating.min(SCALE);
    (0..SCALE)
        .map(|slot| if slot < filled { FILLED } else { EMPTY })
        .collect()
}

/// Compact numeric badge, e.g. `4/5`
pub fn rating_label(rating: u8) -> String {
    format!("{}/{}", rating.min(SCALE), SCALE)
}

/// Starter habits offered by `habitctl suggestions`, numbered from 1 on screen
pub(crate) const SUGGESTED_HABITS: [&str; 7] = [
    "Daily Exercise",
    "Drink 8 glasses of water",
    "Read for 30 minutes",
    "Meditate for 10 minutes",
    "Wake up at 6 AM",
    "Write in journal",
    "Eat a healthy meal",
];

/// Look up a suggestion by its 1-based position
pub(crate) fn suggestion(index: usize) -> Option<&'static str> {
    index
        .checked_sub(1)
        .and_then(|i| SUGGESTED_HABITS.get(i))
        .copied()
}

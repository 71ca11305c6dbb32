#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    match minutes {
        0..=59 => format!("{minutes} min"),
        _ if minutes % 60 == 0 => format!("{} h", minutes / 60),
        _ => format!("{} h {} min", minutes / 60, minutes % 60),
    }
}

#[must_use]
pub fn format_rating(rating: f32) -> String {
    format!("★ {rating:.1}")
}

pub fn format_published_date(raw: &str) -> String {
    if let Ok(datetime) = raw.parse::<chrono::DateTime<chrono::Utc>>() {
        return datetime.format("%B %-d, %Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }
    raw.to_string()
}

// Seconds are zero-padded to two digits, minutes are not.
pub fn format_duration(total_seconds: i64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://i.ytimg.com/vi/{}/hq720.jpg", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_pads_seconds_only() {
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(5), "0:05");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn published_date_accepts_plain_and_full_iso() {
        assert_eq!(format_published_date("2024-03-01"), "March 1, 2024");
        assert_eq!(
            format_published_date("2024-03-01T12:30:00Z"),
            "March 1, 2024"
        );
    }

    #[test]
    fn unparseable_date_falls_through_verbatim() {
        assert_eq!(format_published_date("last tuesday"), "last tuesday");
    }

    #[test]
    fn thumbnail_points_at_ytimg() {
        assert_eq!(
            thumbnail_url("abc123"),
            "https://i.ytimg.com/vi/abc123/hq720.jpg"
        );
    }
}

use crate::model::Media;

/// Abbreviate a listing price: `$2.5M` at a million and up, `$450K`
/// below. The thousands form rounds to a whole number, the millions
/// form keeps one decimal.
pub fn format_price(price: f64) -> String {
    if price >= 1_000_000.0 {
        format!("${:.1}M", price / 1_000_000.0)
    } else {
        format!("${}K", (price / 1_000.0).round())
    }
}

/// Resolve a media record to an absolute URL. The store hands back
/// site-relative upload paths for its own assets and absolute URLs for
/// external ones; missing media becomes an empty string so templates
/// can render a blank slot.
pub fn media_url(media: Option<&Media>, base_url: &str) -> String {
    let Some(media) = media else {
        return String::new();
    };
    if media.url.is_empty() {
        return String::new();
    }
    if media.url.starts_with("http") {
        return media.url.clone();
    }
    format!("{base_url}{}", media.url)
}

#[cfg(test)]
mod tests {
    use super::{format_price, media_url};
    use crate::model::Media;
    use pretty_assertions::assert_eq;

    fn media(url: &str) -> Media {
        Media {
            id: 1,
            url: url.to_string(),
            alternative_text: None,
            width: None,
            height: None,
            formats: None,
        }
    }

    #[test]
    fn prices_abbreviate_to_millions_and_thousands() {
        assert_eq!(format_price(2_500_000.0), "$2.5M");
        assert_eq!(format_price(450_000.0), "$450K");
        assert_eq!(format_price(1_000_000.0), "$1.0M");
        assert_eq!(format_price(999_499.0), "$999K");
        assert_eq!(format_price(12_750_000.0), "$12.8M");
    }

    #[test]
    fn relative_media_urls_get_the_base_prefix() {
        let m = media("/uploads/hero.jpg");
        assert_eq!(
            media_url(Some(&m), "http://localhost:1337"),
            "http://localhost:1337/uploads/hero.jpg"
        );
    }

    #[test]
    fn absolute_media_urls_pass_through() {
        let m = media("https://cdn.example.com/hero.jpg");
        assert_eq!(
            media_url(Some(&m), "http://localhost:1337"),
            "https://cdn.example.com/hero.jpg"
        );
    }

    #[test]
    fn missing_media_is_an_empty_string() {
        assert_eq!(media_url(None, "http://localhost:1337"), "");
        assert_eq!(media_url(Some(&media("")), "http://localhost:1337"), "");
    }
}

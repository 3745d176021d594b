mod common;

use club_news::parser::clean_title;
use club_news::{FeedParser, MAX_FEED_ENTRIES};
use common::{init_tracing, rss_feed};

#[test]
fn test_parse_google_news_items() {
    init_tracing();

    let feed = rss_feed(&[
        (
            "Racing gana 2-0 al Cadiz - Diario Sport",
            "https://news.google.com/rss/articles/abc?oc=5",
        ),
        (
            "El Racing de Santander prepara el derbi - El Diario Montañés",
            "https://news.google.com/rss/articles/def?oc=5",
        ),
    ]);

    let items = FeedParser::new().parse(&feed);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Racing gana 2-0 al Cadiz");
    assert_eq!(items[0].link, "https://news.google.com/rss/articles/abc?oc=5");
    assert_eq!(items[1].title, "El Racing de Santander prepara el derbi");

    assert_eq!(
        items[0].published_at.as_deref(),
        Some("Sun, 18 Oct 2026 07:00:00 GMT")
    );
}

#[test]
fn test_parse_keeps_publication_date_text_verbatim() {
    init_tracing();

    let feed = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>Google News</title>
<link>https://news.google.com</link>
<description>Google News</description>
<item><title><![CDATA[Racing Santander gana en casa - Marca]]></title><link>https://example.com/1</link><pubDate>Sun, 18 Oct 2026 07:00:00 GMT</pubDate><source url="https://www.marca.com">Marca</source></item>
<item><title><![CDATA[Racing de Santander: la previa - AS]]></title><link>https://example.com/2</link><pubDate>18/10/2026 09:00</pubDate></item>
<item><title><![CDATA[Real Racing Club sin fecha - AS]]></title><link>https://example.com/3</link></item>
</channel>
</rss>"#;

    let items = FeedParser::new().parse(feed);

    assert_eq!(items.len(), 3);
    assert_eq!(
        items[0].published_at.as_deref(),
        Some("Sun, 18 Oct 2026 07:00:00 GMT")
    );
    assert_eq!(items[1].published_at.as_deref(), Some("18/10/2026 09:00"));
    assert_eq!(items[2].published_at, None);
}

#[test]
fn test_parse_caps_entries() {
    init_tracing();

    let titles: Vec<String> = (0..25).map(|i| format!("Racing Santander noticia {}", i)).collect();
    let links: Vec<String> = (0..25).map(|i| format!("https://example.com/{}", i)).collect();
    let pairs: Vec<(&str, &str)> = titles
        .iter()
        .zip(links.iter())
        .map(|(t, l)| (t.as_str(), l.as_str()))
        .collect();

    let items = FeedParser::new().parse(&rss_feed(&pairs));

    assert_eq!(items.len(), MAX_FEED_ENTRIES);
    assert_eq!(items[0].title, "Racing Santander noticia 0");
    assert_eq!(items[9].title, "Racing Santander noticia 9");
}

#[test]
fn test_parse_malformed_payloads_yield_nothing() {
    init_tracing();
    let parser = FeedParser::new();

    assert!(parser.parse("").is_empty());
    assert!(parser.parse("this is not a feed").is_empty());
    assert!(parser.parse("<html><body>503 Service Unavailable</body></html>").is_empty());
    assert!(parser.parse("<rss version=\"2.0\"><channel><item><title>").is_empty());
    assert!(parser.parse(&rss_feed(&[])).is_empty());
}

#[test]
fn test_parse_skips_entries_missing_title_or_link() {
    init_tracing();

    let feed = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>Google News</title>
<link>https://news.google.com</link>
<description>Google News</description>
<item><link>https://example.com/no-title</link></item>
<item><title><![CDATA[Racing Santander sin enlace - Marca]]></title></item>
<item><title><![CDATA[   ]]></title><link>https://example.com/blank-title</link></item>
<item><title><![CDATA[Real Racing Club renueva a su portero - AS]]></title><link>https://example.com/ok</link></item>
</channel>
</rss>"#;

    let items = FeedParser::new().parse(feed);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Real Racing Club renueva a su portero");
    assert_eq!(items[0].link, "https://example.com/ok");
    assert!(items[0].published_at.is_none());
}

#[test]
fn test_clean_title() {
    assert_eq!(
        clean_title("Racing gana 2-0 al Cadiz - Diario Sport"),
        "Racing gana 2-0 al Cadiz"
    );
    assert_eq!(clean_title("  Racing Santander - Marca  "), "Racing Santander");
    // Only the last segment is a publisher
    assert_eq!(
        clean_title("Racing - Eibar: crónica - El Diario Montañés"),
        "Racing - Eibar: crónica"
    );
    // A hyphenated last segment is not treated as a publisher
    assert_eq!(clean_title("Racing - Real Sociedad-B"), "Racing - Real Sociedad-B");
    assert_eq!(clean_title("Racing Santander"), "Racing Santander");
}

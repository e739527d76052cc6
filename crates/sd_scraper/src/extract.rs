use scraper::{Html, Selector};
use sd_core::{ArticleDetail, ArticleRegistry, ArticleSummary};
use url::Url;
use uuid::Uuid;

/// Shown in place of a headline when an index item carries no usable heading.
pub const NO_HEADLINE: &str = "No headline available";

/// Stands in for an index item without an anchor. The item still gets an id;
/// resolving that id yields this sentinel instead of a URL.
pub const MISSING_LINK: &str = "#";

/// Walk the index page and produce one summary per listed item.
///
/// Absence of the expected structure is not an error: a missing container
/// yields an empty list, and each missing field inside an item falls back to
/// its default. Every item gets a fresh id, recorded in the registry together
/// with its resolved URL before the summary is emitted, so a caller holding a
/// summary can always resolve its id.
pub fn index(markup: &str, base: &Url, registry: &ArticleRegistry) -> Vec<ArticleSummary> {
    let document = Html::parse_document(markup);

    let container_selector = Selector::parse("ul.inner-lead-story-bottom").unwrap();
    let item_selector = Selector::parse("li").unwrap();
    let h2_selector = Selector::parse("h2").unwrap();
    let h3_selector = Selector::parse("h3").unwrap();
    let link_selector = Selector::parse("a[href]").unwrap();
    let img_selector = Selector::parse("img").unwrap();

    let Some(container) = document.select(&container_selector).next() else {
        return Vec::new();
    };

    let mut summaries = Vec::new();

    for item in container.select(&item_selector) {
        let headline = item
            .select(&h2_selector)
            .next()
            .or_else(|| item.select(&h3_selector).next())
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_else(|| NO_HEADLINE.to_string());

        let article_url = item
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| base.join(href).ok())
            .map(|u| u.to_string())
            .unwrap_or_else(|| MISSING_LINK.to_string());

        let image = item
            .select(&img_selector)
            .next()
            .and_then(|img| img.value().attr("src"))
            .and_then(|src| base.join(src).ok())
            .map(|u| u.to_string())
            .unwrap_or_default();

        let id = Uuid::new_v4().to_string();
        registry.register(id.clone(), article_url);

        summaries.push(ArticleSummary {
            id,
            headline,
            image,
        });
    }

    summaries
}

/// Pull the readable text and lead image out of an article page.
///
/// A page without the known content container produces an all-empty detail
/// record rather than an error; a container without an image leaves `image`
/// empty.
pub fn detail(markup: &str, base: &Url) -> ArticleDetail {
    let document = Html::parse_document(markup);

    let container_selector = Selector::parse("div.article-content-area").unwrap();
    let img_selector = Selector::parse("img").unwrap();

    let Some(container) = document.select(&container_selector).next() else {
        return ArticleDetail {
            content: String::new(),
            image: String::new(),
        };
    };

    let content = container
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let image = container
        .select(&img_selector)
        .next()
        .and_then(|img| img.value().attr("src"))
        .and_then(|src| base.join(src).ok())
        .map(|u| u.to_string())
        .unwrap_or_default();

    ArticleDetail { content, image }
}

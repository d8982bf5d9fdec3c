mod common;

use common::listing_html;
use goodfood_scrape::{extract_listing_links, PageRange, Scraper};
use mockito::{Matcher, Server, ServerGuard};

async fn mock_page(server: &mut ServerGuard, page: u32, status: usize, body: String) -> mockito::Mock {
    server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
        .with_status(status)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create_async()
        .await
}

fn scraper(server: &ServerGuard, concurrency: usize) -> Scraper {
    Scraper::builder()
        .base_url(server.url())
        .max_concurrency(concurrency)
        .requests_per_second(100)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_duplicate_links_across_pages_collapse() {
    let mut server = Server::new_async().await;
    let first = mock_page(
        &mut server,
        1,
        200,
        listing_html(&["/recipes/easy-chicken-curry", "/recipes/easy-chicken-curry"]),
    )
    .await;
    let second = mock_page(&mut server, 2, 200, listing_html(&["/recipes/easy-chicken-curry"])).await;

    let urls = scraper(&server, 1)
        .collect_recipe_urls(PageRange::new(1, 2).unwrap())
        .await;

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(urls.len(), 1);
    assert!(urls.contains(&format!("{}/recipes/easy-chicken-curry", server.url())));
}

#[tokio::test]
async fn test_failed_page_is_skipped() {
    let mut server = Server::new_async().await;
    let _first = mock_page(&mut server, 1, 200, listing_html(&["/recipes/a"])).await;
    let _second = mock_page(&mut server, 2, 500, "Internal error".to_string()).await;
    let _third = mock_page(&mut server, 3, 200, listing_html(&["/recipes/b", "/recipes/c"])).await;

    let urls = scraper(&server, 2)
        .collect_recipe_urls(PageRange::new(1, 3).unwrap())
        .await;

    let base = server.url();
    let mut urls: Vec<String> = urls.into_iter().collect();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            format!("{base}/recipes/a"),
            format!("{base}/recipes/b"),
            format!("{base}/recipes/c"),
        ]
    );
}

#[tokio::test]
async fn test_page_without_results_contributes_nothing() {
    let mut server = Server::new_async().await;
    let _first = mock_page(&mut server, 1, 200, "<html><body><p>No results</p></body></html>".to_string()).await;
    let _second = mock_page(&mut server, 2, 200, listing_html(&["/recipes/b"])).await;

    let urls = scraper(&server, 1)
        .collect_recipe_urls(PageRange::new(1, 2).unwrap())
        .await;

    assert_eq!(urls.len(), 1);
}

#[tokio::test]
async fn test_single_page_range_requests_one_page() {
    let mut server = Server::new_async().await;
    let only = mock_page(&mut server, 4, 200, listing_html(&["/recipes/d"])).await;

    let urls = scraper(&server, 3)
        .collect_recipe_urls(PageRange::new(4, 4).unwrap())
        .await;

    only.assert_async().await;
    assert_eq!(urls.len(), 1);
}

#[test]
fn test_extract_listing_links_resolves_relative_hrefs() {
    let html = listing_html(&["/recipes/a", "https://www.bbcgoodfood.com/recipes/b"]);
    let links = extract_listing_links(&html, "https://www.bbcgoodfood.com");

    assert_eq!(links.len(), 2);
    assert!(links.contains("https://www.bbcgoodfood.com/recipes/a"));
    assert!(links.contains("https://www.bbcgoodfood.com/recipes/b"));
}

#[test]
fn test_extract_listing_links_with_bad_base_is_empty() {
    let html = listing_html(&["/recipes/a"]);
    assert!(extract_listing_links(&html, "not a url").is_empty());
}

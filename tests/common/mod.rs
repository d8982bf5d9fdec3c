#![allow(dead_code)]

/// Page sections of a recipe detail page, by name.
const SECTIONS: [(&str, &str); 9] = [
    (
        "title",
        r#"<div class="post-header__title"><h1 class="heading-1">Easy chicken curry</h1></div>"#,
    ),
    (
        "author",
        r#"<div class="author-link"><a href="/author/goodfoodteam">Good Food team</a></div>"#,
    ),
    (
        "times",
        r#"<ul class="post-header__cook-and-prep-time">
            <li><span>Prep:<time datetime="PT15M">15 mins</time></span></li>
            <li><span>Cook:<time datetime="PT1H">1 hr</time></span></li>
        </ul>"#,
    ),
    (
        "skill",
        r#"<div class="post-header__skill-level"><span>Easy</span></div>"#,
    ),
    (
        "ratings",
        r#"<div class="rating__values">
            <span class="sr-only">A star rating of 4.5 out of 5.</span>
            <span class="rating__count-text body-copy-small">120 ratings</span>
        </div>"#,
    ),
    (
        "image",
        r#"<div class="image__container"><img class="image__img" src="https://images.example.com/curry.jpg" alt="Chicken curry"></div>"#,
    ),
    (
        "nutrition",
        r#"<table class="key-value-blocks"><tbody>
            <tr class="key-value-blocks__item"><td class="key-value-blocks__key">kcal</td><td class="key-value-blocks__value">412</td></tr>
            <tr class="key-value-blocks__item"><td class="key-value-blocks__key">fat</td><td class="key-value-blocks__value">17g</td></tr>
            <tr class="key-value-blocks__item"><td class="key-value-blocks__key">saturates</td><td class="key-value-blocks__value">4g</td></tr>
            <tr class="key-value-blocks__item"><td class="key-value-blocks__key">carbs</td><td class="key-value-blocks__value">29g</td></tr>
            <tr class="key-value-blocks__item"><td class="key-value-blocks__key">sugars</td><td class="key-value-blocks__value">9g</td></tr>
            <tr class="key-value-blocks__item"><td class="key-value-blocks__key">fibre</td><td class="key-value-blocks__value">5g</td></tr>
            <tr class="key-value-blocks__item"><td class="key-value-blocks__key">protein</td><td class="key-value-blocks__value">36g</td></tr>
            <tr class="key-value-blocks__item"><td class="key-value-blocks__key">salt</td><td class="key-value-blocks__value">1.2g</td></tr>
        </tbody></table>"#,
    ),
    (
        "ingredients",
        r#"<section class="recipe__ingredients"><ul>
            <li>1 tbsp <a class="link--styled" href="/glossary/vegetable-oil">vegetable oil</a></li>
            <li>2 <a class="link--styled" href="/glossary/onion">onions</a>, chopped</li>
            <li>400g can <!-- -->chopped tomatoes</li>
            <li>small bunch of coriander (optional)</li>
        </ul></section>"#,
    ),
    (
        "method",
        r#"<section class="recipe__method-steps"><ul>
            <li><div><p>Heat the oil in a large pan.</p></div></li>
            <li><div><p>Add the onions and cook for 5 mins.</p></div></li>
            <li><div><p>Stir in the tomatoes, then simmer for 1 hr.</p></div></li>
        </ul></section>"#,
    ),
];

fn page(body: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head><title>Recipe Page</title></head>
        <body>
            {body}
        </body>
        </html>
        "#
    )
}

/// A complete recipe detail page.
pub fn recipe_html() -> String {
    recipe_html_without(&[])
}

/// A recipe detail page with the named sections left out.
pub fn recipe_html_without(omit: &[&str]) -> String {
    let body = SECTIONS
        .iter()
        .filter(|(name, _)| !omit.contains(name))
        .map(|(_, html)| *html)
        .collect::<Vec<_>>()
        .join("\n");
    page(&body)
}

/// A search results page linking to `hrefs`.
pub fn listing_html(hrefs: &[&str]) -> String {
    let cards = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<article class="card"><a class="link d-block" href="{href}"><h2>Recipe</h2></a></article>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    page(&format!(
        r#"<div class="layout-md-rail__primary"><div class="search-results">{cards}</div></div>"#
    ))
}

mod common;

use common::{recipe_html, recipe_html_without};
use goodfood_scrape::extractors::{Extractor, ParsingContext, RecipeExtractor};
use goodfood_scrape::{extract_recipe, ExtractError, Strategy};

const URL: &str = "https://www.bbcgoodfood.com/recipes/easy-chicken-curry";

#[test]
fn test_full_recipe_extraction() {
    let recipe = extract_recipe(&recipe_html(), URL, Strategy::Heuristic).unwrap();

    assert_eq!(recipe.title, "Easy chicken curry");
    assert_eq!(recipe.image_link, "https://images.example.com/curry.jpg");
    assert_eq!(recipe.author.as_deref(), Some("Good Food team"));
    assert_eq!(recipe.prep_time, 15);
    assert_eq!(recipe.cook_time, 60);
    assert_eq!(recipe.difficulty, "Easy");
    assert_eq!(recipe.rating, Some(4.5));
    assert_eq!(recipe.ratings_count, Some(120));

    assert_eq!(
        recipe.measured_ingredients(),
        vec![
            "1 tbsp vegetable oil",
            "2 onions, chopped",
            "400g can chopped tomatoes",
            "small bunch of coriander (optional)",
        ]
    );
    assert_eq!(
        recipe.raw_ingredients(),
        vec![
            Some("vegetable oil"),
            Some("onions"),
            Some("chopped tomatoes"),
            Some("small bunch of coriander (optional)"),
        ]
    );

    assert_eq!(
        recipe.method,
        vec![
            "Heat the oil in a large pan.",
            "Add the onions and cook for 5 mins.",
            "Stir in the tomatoes, then simmer for 1 hr.",
        ]
    );

    let nutrition = &recipe.nutrition;
    assert_eq!(nutrition.calories, Some(412.0));
    assert_eq!(nutrition.fat, Some(17.0));
    assert_eq!(nutrition.saturates, Some(4.0));
    assert_eq!(nutrition.carbs, Some(29.0));
    assert_eq!(nutrition.sugars, Some(9.0));
    assert_eq!(nutrition.fibre, Some(5.0));
    assert_eq!(nutrition.protein, Some(36.0));
    assert_eq!(nutrition.salt, Some(1.2));
}

#[test]
fn test_parser_strategy_for_unlinked_ingredients() {
    let recipe = extract_recipe(&recipe_html(), URL, Strategy::Parser).unwrap();

    assert_eq!(
        recipe.raw_ingredients(),
        vec![
            Some("vegetable oil"),
            Some("onions"),
            Some("tomatoes"),
            Some("coriander"),
        ]
    );
}

#[test]
fn test_missing_method_discards_recipe() {
    let html = recipe_html_without(&["method"]);
    assert!(extract_recipe(&html, URL, Strategy::Heuristic).is_none());

    let context = ParsingContext::new(URL, &html);
    let result = RecipeExtractor::new(Strategy::Heuristic).parse(&context);
    assert!(matches!(result, Err(ExtractError::MissingRequired("method"))));
}

#[test]
fn test_missing_title_or_ingredients_discards_recipe() {
    let extractor = RecipeExtractor::new(Strategy::Heuristic);

    let context = ParsingContext::new(URL, &recipe_html_without(&["title"]));
    assert!(matches!(
        extractor.parse(&context),
        Err(ExtractError::MissingRequired("title"))
    ));

    let context = ParsingContext::new(URL, &recipe_html_without(&["ingredients"]));
    assert!(matches!(
        extractor.parse(&context),
        Err(ExtractError::MissingRequired("ingredients"))
    ));
}

#[test]
fn test_empty_method_section_discards_recipe() {
    let html = recipe_html_without(&["method"]).replace(
        "</body>",
        r#"<section class="recipe__method-steps"><ul></ul></section></body>"#,
    );
    assert!(extract_recipe(&html, URL, Strategy::Heuristic).is_none());
}

#[test]
fn test_missing_author_keeps_other_fields() {
    let recipe =
        extract_recipe(&recipe_html_without(&["author"]), URL, Strategy::Heuristic).unwrap();

    assert_eq!(recipe.author, None);
    assert_eq!(recipe.title, "Easy chicken curry");
    assert_eq!(recipe.image_link, "https://images.example.com/curry.jpg");
    assert_eq!(recipe.ingredients.len(), 4);
    assert_eq!(recipe.method.len(), 3);
    assert_eq!(recipe.prep_time, 15);
    assert_eq!(recipe.cook_time, 60);
    assert_eq!(recipe.difficulty, "Easy");
    assert_eq!(recipe.rating, Some(4.5));
    assert_eq!(recipe.ratings_count, Some(120));
    assert_eq!(recipe.nutrition.calories, Some(412.0));
    assert_eq!(recipe.nutrition.salt, Some(1.2));
}

#[test]
fn test_optional_sections_fall_back_to_defaults() {
    let html = recipe_html_without(&["author", "times", "skill", "ratings", "image", "nutrition"]);
    let recipe = extract_recipe(&html, URL, Strategy::Heuristic).unwrap();

    assert_eq!(recipe.image_link, "");
    assert_eq!(recipe.author, None);
    assert_eq!(recipe.prep_time, 0);
    assert_eq!(recipe.cook_time, 0);
    assert_eq!(recipe.difficulty, "");
    assert_eq!(recipe.rating, None);
    assert_eq!(recipe.ratings_count, None);
    assert_eq!(recipe.nutrition, Default::default());
    assert_eq!(recipe.ingredients.len(), 4);
}

#[test]
fn test_single_time_element_is_prep_time() {
    let html = recipe_html_without(&["times"]).replace(
        "</body>",
        r#"<ul class="post-header__cook-and-prep-time"><li>Prep:<time>1 hr 10 mins</time></li></ul></body>"#,
    );
    let recipe = extract_recipe(&html, URL, Strategy::Heuristic).unwrap();

    assert_eq!(recipe.prep_time, 70);
    assert_eq!(recipe.cook_time, 0);
}

#[test]
fn test_ingredient_lists_stay_aligned() {
    let recipe = extract_recipe(&recipe_html(), URL, Strategy::Heuristic).unwrap();
    assert_eq!(
        recipe.raw_ingredients().len(),
        recipe.measured_ingredients().len()
    );
}

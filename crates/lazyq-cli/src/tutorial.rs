//! The tutorial sections, in the order the walkthrough presents them.
//!
//! Every section runs (ADDRANGE and REPLACE change the working catalog that
//! later sections see); the section filter only decides what is reported.

use lazyq_core::config::TutorialConfig;
use lazyq_core::record::{additional_products, Product};
use lazyq_core::Result;
use lazyq_operators::{empty, range, repeat, IntoSeq};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: &'static str,
    pub lines: Vec<String>,
}

/// Working state threaded through the sections.
pub struct Tutorial {
    pub products: Vec<Product>,
    pub name_separator: String,
}

type SectionFn = fn(&mut Tutorial) -> Result<Vec<String>>;

const SECTIONS: &[(&str, SectionFn)] = &[
    ("WHERE", where_electronics),
    ("CONTAINS", contains_laptop),
    ("ADDRANGE", add_range),
    ("TOLIST", to_list),
    ("SELECT", select_names),
    ("ORDERBY", order_by_price),
    ("ORDERBYDESCENDING", order_by_price_desc),
    ("THENBY", then_by_price),
    ("FIRST_LAST_ELEMENTAT", element_access),
    ("SINGLEORDEFAULT", single_or_default),
    ("AGGREGATES", aggregates),
    ("JOIN", join_categories),
    ("GROUPJOIN", group_join_categories),
    ("GROUPBY", group_by_category),
    ("RANGE", range_numbers),
    ("EMPTY", empty_sequence),
    ("REPEAT", repeat_values),
    ("SELECTMANY", select_many),
    ("UNION", union_numbers),
    ("CONCAT", concat_numbers),
    ("DISTINCT", distinct_numbers),
    ("EXCEPT", except_numbers),
    ("INTERSECT", intersect_numbers),
    ("ALL", all_expensive),
    ("ANY", any_furniture),
    ("AGGREGATE", aggregate_names),
    ("DEFAULTIFEMPTY", default_if_empty),
    ("SKIP", skip_two),
    ("SKIPWHILE", skip_while_cheap),
    ("SKIPLAST", skip_last_two),
    ("TAKE", take_three),
    ("TAKEWHILE", take_while_affordable),
    ("TAKELAST", take_last_two),
    ("REPLACE", replace_desk),
    ("SKIPWHILE_NUMBERS", skip_while_numbers),
    ("TAKEWHILE_NUMBERS", take_while_numbers),
    ("SKIPWHILE_NAMES", skip_while_names),
    ("TAKEWHILE_NAMES", take_while_names),
    ("TAKEWHILE_SHORT_NAMES", take_while_short_names),
];

pub fn section_names() -> impl Iterator<Item = &'static str> {
    SECTIONS.iter().map(|(name, _)| *name)
}

/// Run all sections over `products`, keeping the ones `config` asks for.
pub fn run_tutorial(config: &TutorialConfig, products: Vec<Product>) -> Result<Vec<Section>> {
    let mut tutorial = Tutorial {
        products,
        name_separator: config.name_separator.clone(),
    };
    let mut out = Vec::new();
    for &(name, run) in SECTIONS {
        let lines = run(&mut tutorial)?;
        tracing::debug!(section = name, lines = lines.len(), "section complete");
        if config.wants_section(name) {
            out.push(Section { name, lines });
        }
    }
    Ok(out)
}

const CATEGORIES: [&str; 2] = ["Electronics", "Furniture"];

fn names<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<String> {
    products.into_seq().map(|p| p.name.clone()).to_list()
}

fn where_electronics(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(names(
        t.products
            .iter()
            .into_seq()
            .filter(|p| p.category == "Electronics"),
    ))
}

fn contains_laptop(t: &mut Tutorial) -> Result<Vec<String>> {
    let found = t
        .products
        .iter()
        .into_seq()
        .map(|p| p.name.clone())
        .contains("Laptop");
    Ok(vec![format!("List contains Laptop: {}", found)])
}

fn add_range(t: &mut Tutorial) -> Result<Vec<String>> {
    let added = additional_products();
    let lines = names(&added);
    t.products.extend(added);
    Ok(lines)
}

fn to_list(t: &mut Tutorial) -> Result<Vec<String>> {
    let all = t.products.iter().into_seq().to_list();
    Ok(names(all))
}

fn select_names(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(t.products
        .iter()
        .into_seq()
        .map(|p| p.name.clone())
        .to_list())
}

fn name_price(p: &Product) -> String {
    format!("{} - {}", p.name, p.price)
}

fn order_by_price(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(t.products
        .iter()
        .into_seq()
        .sort_by(|p| p.price)
        .map(name_price)
        .to_list())
}

fn order_by_price_desc(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(t.products
        .iter()
        .into_seq()
        .sort_by_descending(|p| p.price)
        .map(name_price)
        .to_list())
}

fn then_by_price(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(t.products
        .iter()
        .into_seq()
        .sort_by(|p| p.category.clone())
        .then_by(|p| p.price)
        .map(|p| format!("{} - {} - {}", p.category, p.name, p.price))
        .to_list())
}

fn element_access(t: &mut Tutorial) -> Result<Vec<String>> {
    let first = t.products.iter().into_seq().first()?;
    let last = t.products.iter().into_seq().last()?;
    let third = t.products.iter().into_seq().element_at(2)?;
    Ok(vec![format!(
        "FIRST: {}, LAST: {}, ELEMENTAT(2): {}",
        first.name, last.name, third.name
    )])
}

fn single_or_default(t: &mut Tutorial) -> Result<Vec<String>> {
    let single = t
        .products
        .iter()
        .into_seq()
        .single_or_default(|p| p.name == "Notebook")?;
    Ok(vec![single.map(|p| p.name.clone()).unwrap_or_default()])
}

fn aggregates(t: &mut Tutorial) -> Result<Vec<String>> {
    let prices = || t.products.iter().into_seq().map(|p| p.price);
    let count = prices().count();
    let max = prices().max()?;
    let average = prices().average()?;
    let total: f64 = prices().sum();
    Ok(vec![format!(
        "COUNT: {}, MAX: {}, AVERAGE: {}, SUM: {}",
        count, max, average, total
    )])
}

fn join_categories(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(t.products
        .iter()
        .into_seq()
        .join(
            CATEGORIES,
            |p| p.category.clone(),
            |c| c.to_string(),
            |p, c| format!("{} belongs to {}", p.name, c),
        )
        .to_list())
}

fn group_join_categories(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(CATEGORIES
        .into_seq()
        .group_join(
            t.products.iter(),
            |c| c.to_string(),
            |p| p.category.clone(),
            |c, matches| {
                let mut lines = vec![format!("{}:", c)];
                lines.extend(matches.iter().map(|p| format!("- {}", p.name)));
                lines
            },
        )
        .flat_map(|lines| lines)
        .to_list())
}

fn group_by_category(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(t.products
        .iter()
        .into_seq()
        .group_by(|p| p.category.clone())
        .flat_map(|group| {
            let mut lines = vec![group.key().clone()];
            lines.extend(group.iter().map(|p| format!("- {}", p.name)));
            lines
        })
        .to_list())
}

fn range_numbers(_t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(range(1, 10)?.map(|n| n.to_string()).to_list())
}

fn empty_sequence(_t: &mut Tutorial) -> Result<Vec<String>> {
    let count = empty::<i64>().count();
    Ok(vec![format!("Sequence is empty. Count: {}", count)])
}

fn repeat_values(_t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(repeat("Hello", 3)?.map(str::to_string).to_list())
}

fn select_many(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(t.products
        .iter()
        .into_seq()
        .group_by(|p| p.category.clone())
        .flat_map(|group| {
            let (key, members) = group.into_parts();
            members
                .into_seq()
                .map(move |p| format!("{}: {}", key, p.name))
        })
        .to_list())
}

fn numbers(seq: impl IntoIterator<Item = i64>) -> Vec<String> {
    seq.into_seq().map(|n| n.to_string()).to_list()
}

fn union_numbers(_t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(numbers(vec![1, 2, 3].into_seq().union(vec![3, 4, 5])))
}

fn concat_numbers(_t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(numbers(vec![1, 2, 3].into_seq().concat(vec![3, 4, 5])))
}

fn distinct_numbers(_t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(numbers(vec![1, 2, 2, 3, 3, 4].into_seq().distinct()))
}

fn except_numbers(_t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(numbers(vec![1, 2, 3, 4].into_seq().except(vec![3, 4])))
}

fn intersect_numbers(_t: &mut Tutorial) -> Result<Vec<String>> {
    let both = vec![1, 2, 3, 4].into_seq().intersect(vec![3, 4, 5]);
    Ok(numbers(both))
}

fn all_expensive(t: &mut Tutorial) -> Result<Vec<String>> {
    let all = t.products.iter().into_seq().all(|p| p.price > 100.0);
    Ok(vec![format!("All products are expensive: {}", all)])
}

fn any_furniture(t: &mut Tutorial) -> Result<Vec<String>> {
    let any = t
        .products
        .iter()
        .into_seq()
        .any(|p| p.category == "Furniture");
    Ok(vec![format!("Any furniture products: {}", any)])
}

fn aggregate_names(t: &mut Tutorial) -> Result<Vec<String>> {
    let sep = &t.name_separator;
    let combined = t
        .products
        .iter()
        .into_seq()
        .map(|p| p.name.clone())
        .aggregate(|acc, next| format!("{}{}{}", acc, sep, next))?;
    Ok(vec![format!("Combined product names: {}", combined)])
}

fn default_if_empty(_t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(Vec::<Product>::new()
        .into_seq()
        .default_if_empty(Product::named("No Products"))
        .map(|p| p.name)
        .to_list())
}

fn skip_two(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(names(t.products.iter().into_seq().skip(2)))
}

fn skip_while_cheap(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(t.products
        .iter()
        .into_seq()
        .skip_while(|p| p.price < 300.0)
        .map(|p| p.price.to_string())
        .to_list())
}

fn skip_last_two(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(names(t.products.iter().into_seq().skip_last(2)))
}

fn take_three(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(names(t.products.iter().into_seq().take(3)))
}

fn take_while_affordable(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(names(
        t.products
            .iter()
            .into_seq()
            .take_while(|p| p.price < 1000.0),
    ))
}

fn take_last_two(t: &mut Tutorial) -> Result<Vec<String>> {
    Ok(names(t.products.iter().into_seq().take_last(2)))
}

fn replace_desk(t: &mut Tutorial) -> Result<Vec<String>> {
    t.products = std::mem::take(&mut t.products)
        .into_seq()
        .replace_where(
            |p| p.name == "Desk",
            |p| Product {
                name: "Office Desk".to_string(),
                ..p
            },
        )
        .to_list();
    Ok(t.products
        .iter()
        .into_seq()
        .map(|p| format!("{} {}", p.name, p.price))
        .to_list())
}

fn skip_while_numbers(_t: &mut Tutorial) -> Result<Vec<String>> {
    let skipped = numbers(range(1, 7)?.skip_while(|x| *x < 4));
    Ok(vec![format!("SkipWhile Result: {}", skipped.join(", "))])
}

fn take_while_numbers(_t: &mut Tutorial) -> Result<Vec<String>> {
    let taken = numbers(range(1, 7)?.take_while(|x| *x < 4));
    Ok(vec![format!("TakeWhile Result: {}", taken.join(", "))])
}

const NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "David", "Eve"];

fn skip_while_names(_t: &mut Tutorial) -> Result<Vec<String>> {
    let rest = NAMES
        .into_seq()
        .skip_while(|name| name.starts_with('A'))
        .to_list();
    Ok(vec![format!("Skipped Names: {}", rest.join("/"))])
}

fn take_while_names(_t: &mut Tutorial) -> Result<Vec<String>> {
    let taken = NAMES.into_seq().take_while(|name| name.len() < 4).to_list();
    Ok(vec![format!("Take Names: {}", taken.join("/"))])
}

fn take_while_short_names(_t: &mut Tutorial) -> Result<Vec<String>> {
    let taken = ["Bob", "Eve", "Charlie", "David", "kek"]
        .into_seq()
        .take_while(|name| name.len() <= 4)
        .to_list();
    Ok(vec![format!("TakeWhile Result: {}", taken.join(", "))])
}

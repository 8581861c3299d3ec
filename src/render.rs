//! Text rendering of the restaurant list

use crate::pagination::Direction;
use crate::state::ViewState;
use crate::types::{RestaurantSummary, SortOrder};

/// Heading shown above the list
pub const HEADING: &str = "Os restaurantes mais bacanas!";

/// Renders one restaurant
pub trait ItemRenderer {
    /// Visual representation of `restaurant`
    fn render(&self, restaurant: &RestaurantSummary) -> String;
}

/// `#<id> <name>`
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRenderer;

impl ItemRenderer for PlainRenderer {
    fn render(&self, restaurant: &RestaurantSummary) -> String {
        format!("#{} {}", restaurant.id, restaurant.name)
    }
}

impl<F> ItemRenderer for F
where
    F: Fn(&RestaurantSummary) -> String,
{
    fn render(&self, restaurant: &RestaurantSummary) -> String {
        self(restaurant)
    }
}

/// Render the whole view: heading, form, items, then the two controls
pub fn render_view(state: &ViewState, renderer: &dyn ItemRenderer) -> String {
    let mut lines = vec![
        HEADING.to_string(),
        format!("Busca: {}", state.search),
        format!("Ordenação: {}", render_ordering(state.ordering)),
    ];

    lines.extend(state.restaurants.iter().map(|r| renderer.render(r)));

    lines.push(render_control(state, Direction::Previous));
    lines.push(render_control(state, Direction::Next));

    lines.join("\n")
}

/// Selector line with the current choice in brackets
fn render_ordering(selected: SortOrder) -> String {
    SortOrder::ALL
        .iter()
        .map(|o| {
            if *o == selected {
                format!("[{}]", o.label())
            } else {
                o.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_control(state: &ViewState, direction: Direction) -> String {
    if state.is_enabled(direction) {
        format!("[{}]", direction.label())
    } else {
        format!("[{}] (desativado)", direction.label())
    }
}

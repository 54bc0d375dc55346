//! Terminal rendering of lineup views, rosters and the formation catalog.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use lineup_model::{
    BudgetSummary, FormationCatalog, LineupStatistics, LineupStatus, LineupView, Player, Position,
    SlotView,
};

const BAR_WIDTH: usize = 30;
const BAR_GLYPH: char = '█';

pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

pub fn format_remaining(budget: &BudgetSummary) -> String {
    format!("Remaining budget: {:.2} million", budget.remaining)
}

/// Budget line, overspend warning and status message, in display order.
pub fn status_lines(view: &LineupView) -> Vec<String> {
    let mut lines = vec![format_remaining(&view.budget)];
    if view.budget.is_exceeded() {
        lines.push("Warning: Budget exceeded!".to_string());
    }
    lines.push(view.status.message().to_string());
    lines
}

/// Horizontal bar scaled so that `max` spans the full width.
pub fn price_bar(price: f64, max: f64) -> String {
    if max <= 0.0 || price <= 0.0 {
        return String::new();
    }
    let ratio = (price / max).clamp(0.0, 1.0);
    let filled = ((ratio * BAR_WIDTH as f64).round() as usize).max(1);
    std::iter::repeat_n(BAR_GLYPH, filled).collect()
}

pub fn render_view(view: &LineupView) -> String {
    let mut lines = vec![
        format!(
            "Formation: {}  |  Price: {} - {}  |  Team: {}",
            view.formation,
            format_price(view.filter.price_min),
            format_price(view.filter.price_max),
            view.filter.team
        ),
        slot_table(&view.slots, view.budget.total_spent).to_string(),
    ];
    lines.extend(status_lines(view));
    if let Some(stats) = &view.statistics {
        lines.push(String::new());
        lines.push(render_statistics(stats));
    }
    lines.join("\n") + "\n"
}

fn slot_table(slots: &[SlotView], total_spent: f64) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Slot"),
        header_cell("Player"),
        header_cell("Price"),
        header_cell("Options"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for slot in slots {
        let (player, price) = match (&slot.selected, slot.price) {
            (Some(name), Some(price)) => (Cell::new(name), Cell::new(format_price(price))),
            _ => (dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![
            position_cell(slot.key.position, slot.key.to_string()),
            player,
            price,
            Cell::new(slot.options.len()),
        ]);
    }
    let filled = slots.iter().filter(|slot| slot.selected.is_some()).count();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{filled}/{} filled", slots.len())).add_attribute(Attribute::Bold),
        Cell::new(format_price(total_spent)).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

pub fn render_statistics(stats: &LineupStatistics) -> String {
    let max = stats
        .players_by_price
        .last()
        .map_or(0.0, |player| player.price);
    let mut prices = Table::new();
    prices.set_header(vec![
        header_cell("Player"),
        header_cell("Price"),
        header_cell(""),
    ]);
    apply_table_style(&mut prices);
    align_column(&mut prices, 1, CellAlignment::Right);
    for player in &stats.players_by_price {
        prices.add_row(vec![
            Cell::new(&player.name),
            Cell::new(format_price(player.price)),
            position_cell(player.position, price_bar(player.price, max)),
        ]);
    }

    let mut zones = Table::new();
    zones.set_header(vec![
        header_cell("Zone"),
        header_cell("Total"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut zones);
    align_column(&mut zones, 1, CellAlignment::Right);
    align_column(&mut zones, 2, CellAlignment::Right);
    for zone in &stats.budget_by_zone {
        zones.add_row(vec![
            Cell::new(zone.zone.label()),
            Cell::new(format_price(zone.total)),
            Cell::new(format!("{:.1}%", zone.share)),
        ]);
    }

    let mut teams = Table::new();
    teams.set_header(vec![header_cell("Team"), header_cell("Players")]);
    apply_table_style(&mut teams);
    align_column(&mut teams, 1, CellAlignment::Right);
    for entry in &stats.players_per_team {
        teams.add_row(vec![Cell::new(&entry.team), Cell::new(entry.players)]);
    }
    [
        "Summary statistics".to_string(),
        format!("Players by price\n{prices}"),
        format!("Budget by zone\n{zones}"),
        format!(
            "Most expensive player: {} ({} million)",
            stats.most_expensive.name,
            format_price(stats.most_expensive.price)
        ),
        format!("Most frequent team: {}", stats.most_frequent_team),
        format!("Players per team\n{teams}"),
    ]
    .join("\n")
}

pub fn render_formations(catalog: &FormationCatalog) -> String {
    let mut table = Table::new();
    let mut header = vec![header_cell("Formation")];
    header.extend(Position::ALL.iter().map(|position| header_cell(position.as_code())));
    header.push(header_cell("Slots"));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=Position::ALL.len() + 1 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (index, formation) in catalog.formations().iter().enumerate() {
        let name = if index == 0 {
            Cell::new(format!("{} (default)", formation.name)).add_attribute(Attribute::Bold)
        } else {
            Cell::new(&formation.name)
        };
        let mut row = vec![name];
        row.extend(
            Position::ALL
                .iter()
                .map(|position| Cell::new(formation.count(*position))),
        );
        row.push(Cell::new(formation.total_slots()));
        table.add_row(row);
    }
    table.to_string()
}

pub fn render_roster(players: &[&Player]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Player"),
        header_cell("Position"),
        header_cell("Team"),
        header_cell("Price"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for player in players {
        table.add_row(vec![
            Cell::new(&player.name),
            position_cell(player.position, player.position.as_code()),
            Cell::new(&player.team),
            Cell::new(format_price(player.price)),
        ]);
    }
    if players.is_empty() {
        table.add_row(vec![dim_cell("no players match"), dim_cell(""), dim_cell(""), dim_cell("")]);
    }
    table.to_string()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn position_cell<T: ToString>(position: Position, value: T) -> Cell {
    let color = match position {
        Position::Goalkeeper => Color::Yellow,
        Position::Defense => Color::Blue,
        Position::Midfield => Color::Green,
        Position::Forward => Color::Red,
    };
    Cell::new(value).fg(color)
}

/// Status in a word, for log fields and the session prompt.
pub fn status_label(status: LineupStatus) -> &'static str {
    match status {
        LineupStatus::Incomplete => "incomplete",
        LineupStatus::OverBudget => "over budget",
        LineupStatus::Valid => "valid",
    }
}

use eframe::egui::{self, Color32, RichText, Ui};

// ---------------------------------------------------------------------------
// Shared presentational helpers
// ---------------------------------------------------------------------------

/// A centered statistic card: big accented value over a small caption.
pub fn stat_card(ui: &mut Ui, value: &str, caption: &str, accent: Color32) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui: &mut Ui| {
            ui.set_min_width(140.0);
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(value).heading().color(accent));
                ui.label(RichText::new(caption).weak().small());
            });
        });
}

/// A small tinted badge label.
pub fn badge(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(
        RichText::new(text)
            .small()
            .color(color)
            .background_color(color.linear_multiply(0.15)),
    );
}

/// Initials drawn from a full name ("Dr. Sarah Johnson" → "DSJ").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// Dollar amount with thousands separators: 165000 → "$165,000".
pub fn format_usd(amount: f64) -> String {
    let value = amount.round() as i64;
    let (sign, value) = if value < 0 { ("-", -value) } else { ("", value) };
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}${grouped}")
}

/// Compact salary figure for roster cards: 165000 → "$165K".
pub fn format_usd_compact(amount: f64) -> String {
    format!("${:.0}K", amount / 1000.0)
}

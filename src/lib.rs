use chrono::{Duration, NaiveDate};
use log::{debug, info};
use std::fmt;
use thousands::Separable;

/// Default behavior parameters
pub mod defaults {
    pub const AUTO_SLIDE_MS: u32 = 5000;
    pub const MIN_TRIP_DAYS: i64 = 7;
    pub const FILTER_ALL: &str = "todos";
    pub const DEFAULT_PACKAGE_TITLE: &str = "Pacote Personalizado";
    pub const DEFAULT_PAGE: &str = "index.html";
    pub const CURRENCY_PREFIX: &str = "R$ ";
    pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
    pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";
    pub const PROGRESS_TRANSITION: &str = "width 1.5s ease-in-out";
}

// ──────────────────────────────────────────────────────────────────────────────
// Errors

/// Validation failures surfaced to the user. `Display` yields the message shown
/// in the browser dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    InvalidEmail,
    MissingRequiredFields,
    MissingTripDates,
    EndNotAfterStart { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::InvalidEmail => {
                write!(f, "Por favor, insira um endereço de e-mail válido.")
            }
            FormError::MissingRequiredFields => {
                write!(f, "Por favor, preencha todos os campos obrigatórios (*).")
            }
            FormError::MissingTripDates => {
                write!(f, "Por favor, informe as datas de início e término da viagem.")
            }
            FormError::EndNotAfterStart { .. } => {
                write!(f, "A data de término deve ser posterior à data de início!")
            }
        }
    }
}

impl std::error::Error for FormError {}

// ──────────────────────────────────────────────────────────────────────────────
// Slider

/// Direction of a single slider step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Owned slider state: the active slide, the hover pause flag and a revision
/// counter that changes on every navigation.
///
/// The UI layer keys its autoplay timer on `(revision, autoplay_armed)`, so any
/// navigation cancels the pending tick and schedules a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    len: usize,
    current: usize,
    paused: bool,
    revision: u64,
}

impl Slider {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            paused: false,
            revision: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Move one slide in `step` direction, wrapping at both ends.
    ///
    /// Returns `false` (and changes nothing) for an empty slide set.
    pub fn advance(&mut self, step: Step) -> bool {
        if self.is_empty() {
            return false;
        }
        self.current = match step {
            Step::Forward => (self.current + 1) % self.len,
            // (current + len - 1) % len keeps the arithmetic unsigned
            Step::Backward => (self.current + self.len - 1) % self.len,
        };
        self.touch();
        true
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        self.touch();
        true
    }

    pub fn pause(&mut self) -> bool {
        let changed = !self.paused;
        self.paused = true;
        changed
    }

    pub fn resume(&mut self) -> bool {
        let changed = self.paused;
        self.paused = false;
        changed
    }

    /// Whether the slide (or indicator) at `index` carries the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current
    }

    /// Whether an autoplay timer should be running right now.
    pub fn autoplay_armed(&self) -> bool {
        !self.is_empty() && !self.paused
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Cost calculator

/// Per-person and group amounts derived from the calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostSplit {
    pub per_person: f64,
    pub per_person_with_extra: f64,
    pub group_total: f64,
}

/// Result of reading the three calculator fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostOutcome {
    Split(CostSplit),
    /// The person count parsed below one: the field goes back to "1" and
    /// nothing is recomputed this cycle.
    ResetPeople,
}

/// Parsed person count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeopleInput {
    Count(u32),
    BelowOne,
}

/// Split `total` evenly between `people` and add `extra` per person.
pub fn split_costs(total: f64, people: u32, extra: f64) -> CostSplit {
    let people = people.max(1) as f64;
    let per_person = total / people;
    let per_person_with_extra = per_person + extra;
    CostSplit {
        per_person,
        per_person_with_extra,
        group_total: per_person_with_extra * people,
    }
}

/// Parse a monetary amount. Empty, unparseable, negative or non-finite input is 0.
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Parse the person count. Empty or unparseable input counts as one person,
/// fractional input is truncated.
pub fn parse_people(input: &str) -> PeopleInput {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => {
            let whole = v.trunc();
            if whole < 1.0 {
                PeopleInput::BelowOne
            } else {
                PeopleInput::Count(whole.min(u32::MAX as f64) as u32)
            }
        }
        _ => PeopleInput::Count(1),
    }
}

/// Run the calculator over the raw text of its three fields.
pub fn calculate_costs(total: &str, people: &str, extra: &str) -> CostOutcome {
    match parse_people(people) {
        PeopleInput::BelowOne => {
            debug!("Person count '{}' below one, resetting field", people);
            CostOutcome::ResetPeople
        }
        PeopleInput::Count(count) => {
            CostOutcome::Split(split_costs(parse_amount(total), count, parse_amount(extra)))
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Formatting

/// Format an amount as Brazilian currency: `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!(
        "{}{}{},{}",
        defaults::CURRENCY_PREFIX,
        sign,
        whole.separate_with_dots(),
        cents
    )
}

/// Parse the `YYYY-MM-DD` value of a date input.
pub fn parse_input_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), defaults::DATE_INPUT_FORMAT).ok()
}

/// Render a date the way a date input expects it (`YYYY-MM-DD`).
pub fn format_input_date(date: NaiveDate) -> String {
    date.format(defaults::DATE_INPUT_FORMAT).to_string()
}

/// Render a date for people (`DD/MM/YYYY`).
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(defaults::DATE_DISPLAY_FORMAT).to_string()
}

// ──────────────────────────────────────────────────────────────────────────────
// Date-range guard

/// New constraints for the end-date input after the start date changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndDateBound {
    /// Lower bound for the end-date input.
    pub min: NaiveDate,
    /// Replacement end date, when the current one falls before `min`.
    pub corrected: Option<NaiveDate>,
}

/// Earliest end date allowed for a trip starting on `start`.
pub fn earliest_end(start: NaiveDate) -> Option<NaiveDate> {
    start.checked_add_signed(Duration::days(defaults::MIN_TRIP_DAYS))
}

/// Recompute the end-date bound from the raw start and end input values.
///
/// Returns `None` when the start date does not parse. An empty or unparseable
/// end date is left alone.
pub fn guard_end_date(start: &str, end: &str) -> Option<EndDateBound> {
    let start = parse_input_date(start)?;
    let min = earliest_end(start)?;
    let corrected = parse_input_date(end).filter(|end| *end < min).map(|_| min);
    Some(EndDateBound { min, corrected })
}

// ──────────────────────────────────────────────────────────────────────────────
// Group trip form

/// Raw field values of the group-creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTripForm {
    pub name: String,
    pub people: String,
    pub start: String,
    pub end: String,
}

/// A validated (simulated) group trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTrip {
    pub name: String,
    pub people: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl GroupTripForm {
    /// Check the date ordering and build the trip.
    pub fn validate(&self) -> Result<GroupTrip, FormError> {
        let (start, end) = match (parse_input_date(&self.start), parse_input_date(&self.end)) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(FormError::MissingTripDates),
        };
        if end <= start {
            return Err(FormError::EndNotAfterStart { start, end });
        }
        Ok(GroupTrip {
            name: self.name.trim().to_string(),
            people: self.people.trim().parse().unwrap_or(0),
            start,
            end,
        })
    }
}

impl GroupTrip {
    /// Confirmation text shown after the group is "created".
    pub fn confirmation(&self) -> String {
        format!(
            "Grupo \"{}\" criado com sucesso!\n\nDetalhes:\n- {} pessoas\n- De {} até {}\n\n\
             Um link de convite será enviado para você compartilhar com seus amigos!",
            self.name,
            self.people,
            format_display_date(self.start),
            format_display_date(self.end)
        )
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Contact form

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// The email check runs first so the caller can move focus to that field.
    pub fn validate(&self) -> Result<ContactRequest, FormError> {
        if !self.email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(FormError::MissingRequiredFields);
        }
        Ok(ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

impl ContactRequest {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    pub fn confirmation(&self) -> String {
        format!(
            "Sucesso! Obrigado, {}.\nSua solicitação foi enviada.\nEntraremos em contato em breve.",
            self.first_name()
        )
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Destination filter

/// Active destination filter. `todos` on the page maps to [`DestinationFilter::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DestinationFilter {
    #[default]
    All,
    Category(String),
}

impl DestinationFilter {
    pub fn from_attr(value: &str) -> Self {
        if value == defaults::FILTER_ALL {
            DestinationFilter::All
        } else {
            DestinationFilter::Category(value.to_string())
        }
    }

    /// Value for the button's `data-filter` attribute.
    pub fn as_attr(&self) -> &str {
        match self {
            DestinationFilter::All => defaults::FILTER_ALL,
            DestinationFilter::Category(c) => c,
        }
    }

    pub fn shows(&self, category: &str) -> bool {
        match self {
            DestinationFilter::All => true,
            DestinationFilter::Category(c) => c == category,
        }
    }

    /// CSS `display` value for a card of `category`.
    pub fn display_for(&self, category: &str) -> &'static str {
        if self.shows(category) {
            "block"
        } else {
            "none"
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Mobile menu & navigation

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// State after a navigation link is followed: always closed.
    pub fn after_navigation(self) -> Self {
        Self { open: false }
    }

    pub fn icon_class(&self) -> &'static str {
        if self.open {
            "fas fa-times"
        } else {
            "fas fa-bars"
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

/// File name of the current page (`index.html` for the site root).
pub fn current_page(path: &str) -> &str {
    path.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(defaults::DEFAULT_PAGE)
}

/// Whether the nav link pointing at `href` belongs to the page at `path`.
pub fn is_active_link(href: &str, path: &str) -> bool {
    href.rsplit('/').next() == Some(current_page(path))
}

// ──────────────────────────────────────────────────────────────────────────────
// Packages & progress

/// Title for a package card's `data-pacote` value.
pub fn package_title(kind: &str) -> &'static str {
    match kind {
        "amigos" => "Pacote para Amigos",
        "familia" => "Pacote para Família",
        "casais" => "Pacote para Casais",
        _ => defaults::DEFAULT_PACKAGE_TITLE,
    }
}

pub fn package_message(kind: &str) -> String {
    info!("Package selected: {}", kind);
    format!(
        "Você selecionou o {}!\n\nEm breve nossa equipe entrará em contato para personalizar \
         este pacote de acordo com as necessidades do seu grupo.",
        package_title(kind)
    )
}

/// Phase of the progress-bar fill animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    /// Width pinned at 0% so the transition has a starting point.
    Reset,
    /// Target width with the transition applied.
    Filling,
}

/// Inline style for a progress bar filled to `percent` (clamped to 100).
pub fn progress_style(percent: u8, phase: ProgressPhase) -> String {
    match phase {
        ProgressPhase::Reset => "width: 0%;".to_string(),
        ProgressPhase::Filling => format!(
            "width: {}%; transition: {};",
            percent.min(100),
            defaults::PROGRESS_TRANSITION
        ),
    }
}

pub mod catalog;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    // --- slider ---

    #[test]
    fn slider_wraps_forward_and_backward() {
        let mut slider = Slider::new(3);
        assert!(slider.advance(Step::Backward));
        assert_eq!(slider.current(), 2);
        assert!(slider.advance(Step::Forward));
        assert_eq!(slider.current(), 0);
    }

    #[test]
    fn slider_full_cycle_returns_to_start() {
        let mut slider = Slider::new(5);
        slider.go_to(3);
        for _ in 0..slider.len() {
            slider.advance(Step::Forward);
        }
        assert_eq!(slider.current(), 3);
    }

    #[test]
    fn slider_index_stays_in_bounds() {
        let mut slider = Slider::new(4);
        let ops = [0usize, 1, 2, 1, 1, 0, 2, 2, 2, 0, 1];
        for (i, op) in ops.iter().enumerate() {
            match op {
                0 => {
                    slider.advance(Step::Forward);
                }
                1 => {
                    slider.advance(Step::Backward);
                }
                _ => {
                    slider.go_to(i * 7);
                }
            }
            assert!(slider.current() < slider.len());
            let active = (0..slider.len()).filter(|&i| slider.is_active(i)).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn empty_slider_ignores_everything() {
        let mut slider = Slider::new(0);
        let before = slider.clone();
        assert!(!slider.advance(Step::Forward));
        assert!(!slider.advance(Step::Backward));
        assert!(!slider.go_to(0));
        assert_eq!(slider, before);
        assert!(!slider.is_active(0));
        assert!(!slider.autoplay_armed());
    }

    #[test]
    fn every_navigation_bumps_revision() {
        let mut slider = Slider::new(2);
        slider.go_to(1);
        let rev = slider.revision();
        slider.go_to(1);
        assert_eq!(slider.current(), 1);
        assert_eq!(slider.revision(), rev + 1);
        assert!(!slider.go_to(2));
        assert_eq!(slider.revision(), rev + 1);
    }

    #[test]
    fn hover_pauses_autoplay() {
        let mut slider = Slider::new(3);
        assert!(slider.autoplay_armed());
        assert!(slider.pause());
        assert!(!slider.pause());
        assert!(!slider.autoplay_armed());
        slider.advance(Step::Forward);
        assert!(!slider.autoplay_armed());
        assert!(slider.resume());
        assert!(slider.autoplay_armed());
    }

    // --- calculator ---

    #[test]
    fn splits_three_hundred_between_three() {
        let split = split_costs(300.0, 3, 10.0);
        assert_eq!(format_brl(split.per_person), "R$ 100,00");
        assert_eq!(format_brl(split.per_person_with_extra), "R$ 110,00");
        assert_eq!(format_brl(split.group_total), "R$ 330,00");
    }

    #[test]
    fn group_total_matches_formula() {
        for &(total, count, extra) in &[
            (0.0, 1, 0.0),
            (1234.56, 7, 12.5),
            (99.99, 3, 0.01),
            (1_000_000.0, 13, 250.0),
        ] {
            let split = split_costs(total, count, extra);
            let expected = (total / count as f64 + extra) * count as f64;
            assert!((split.group_total - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn invalid_amounts_are_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-5"), 0.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
    }

    #[test]
    fn people_parsing_follows_field_rules() {
        assert_eq!(parse_people(""), PeopleInput::Count(1));
        assert_eq!(parse_people("xyz"), PeopleInput::Count(1));
        assert_eq!(parse_people("2.7"), PeopleInput::Count(2));
        assert_eq!(parse_people("0"), PeopleInput::BelowOne);
        assert_eq!(parse_people("-3"), PeopleInput::BelowOne);
    }

    #[test]
    fn calculator_resets_people_below_one() {
        assert_eq!(calculate_costs("300", "0", "10"), CostOutcome::ResetPeople);
        match calculate_costs("300", "", "") {
            CostOutcome::Split(split) => assert_eq!(split.group_total, 300.0),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    // --- formatting ---

    #[test]
    fn formats_brazilian_currency() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(1_234_567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(f64::NAN), "R$ 0,00");
    }

    #[test]
    fn formats_dates_for_display() {
        assert_eq!(format_display_date(date(2025, 12, 31)), "31/12/2025");
        assert_eq!(format_input_date(date(2025, 1, 5)), "2025-01-05");
        assert_eq!(parse_input_date("2025-01-05"), Some(date(2025, 1, 5)));
        assert_eq!(parse_input_date("05/01/2025"), None);
    }

    // --- date guard ---

    #[test]
    fn early_end_date_is_pushed_to_a_week_after_start() {
        let bound = guard_end_date("2025-03-01", "2025-03-04").expect("start parses");
        assert_eq!(bound.min, date(2025, 3, 8));
        assert_eq!(bound.corrected, Some(date(2025, 3, 8)));
    }

    #[test]
    fn later_end_date_is_kept() {
        let bound = guard_end_date("2025-03-01", "2025-03-20").expect("start parses");
        assert_eq!(bound.corrected, None);
        let exact = guard_end_date("2025-03-01", "2025-03-08").expect("start parses");
        assert_eq!(exact.corrected, None);
    }

    #[test]
    fn guard_handles_missing_values() {
        assert_eq!(guard_end_date("", "2025-03-20"), None);
        let bound = guard_end_date("2025-12-28", "").expect("start parses");
        assert_eq!(bound.min, date(2026, 1, 4));
        assert_eq!(bound.corrected, None);
    }

    // --- group form ---

    fn group_form(start: &str, end: &str) -> GroupTripForm {
        GroupTripForm {
            name: "Amigos da Praia".into(),
            people: "6".into(),
            start: start.into(),
            end: end.into(),
        }
    }

    #[test]
    fn group_form_rejects_end_not_after_start() {
        let same = group_form("2025-07-10", "2025-07-10").validate();
        assert_eq!(
            same,
            Err(FormError::EndNotAfterStart {
                start: date(2025, 7, 10),
                end: date(2025, 7, 10)
            })
        );
        assert!(group_form("2025-07-10", "2025-07-01").validate().is_err());
        assert_eq!(
            group_form("", "2025-07-01").validate(),
            Err(FormError::MissingTripDates)
        );
    }

    #[test]
    fn group_form_confirmation_lists_details() {
        let trip = group_form("2025-07-10", "2025-07-20")
            .validate()
            .expect("valid trip");
        assert_eq!(trip.people, 6);
        let msg = trip.confirmation();
        assert!(msg.starts_with("Grupo \"Amigos da Praia\" criado com sucesso!"));
        assert!(msg.contains("- 6 pessoas"));
        assert!(msg.contains("- De 10/07/2025 até 20/07/2025"));
    }

    // --- contact form ---

    #[test]
    fn contact_form_requires_at_sign_first() {
        let form = ContactForm {
            name: String::new(),
            email: "ana.example.com".into(),
            message: String::new(),
        };
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn contact_form_requires_all_fields() {
        let form = ContactForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            message: "   ".into(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingRequiredFields));
    }

    #[test]
    fn contact_form_thanks_first_name() {
        let form = ContactForm {
            name: "Ana Maria Souza".into(),
            email: "ana@example.com".into(),
            message: "Quero um orçamento".into(),
        };
        let request = form.validate().expect("valid form");
        assert_eq!(request.first_name(), "Ana");
        assert!(request.confirmation().starts_with("Sucesso! Obrigado, Ana."));
    }

    // --- filter, menu, nav, packages ---

    #[test]
    fn filter_todos_shows_everything() {
        let filter = DestinationFilter::from_attr("todos");
        assert_eq!(filter, DestinationFilter::All);
        for category in ["familia", "amigos", "casais"] {
            assert!(filter.shows(category));
            assert_eq!(filter.display_for(category), "block");
        }
    }

    #[test]
    fn filter_category_hides_others() {
        let filter = DestinationFilter::from_attr("familia");
        assert!(filter.shows("familia"));
        assert!(!filter.shows("casais"));
        assert_eq!(filter.display_for("amigos"), "none");
        assert_eq!(filter.as_attr(), "familia");
    }

    #[test]
    fn menu_mirrors_state_in_icon_and_aria() {
        let menu = MenuState::default();
        assert_eq!(menu.icon_class(), "fas fa-bars");
        assert_eq!(menu.aria_expanded(), "false");
        let open = menu.toggle();
        assert!(open.is_open());
        assert_eq!(open.icon_class(), "fas fa-times");
        assert_eq!(open.aria_expanded(), "true");
        assert!(!open.after_navigation().is_open());
    }

    #[test]
    fn active_link_follows_current_page() {
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page("/site/contato.html"), "contato.html");
        assert!(is_active_link("index.html", "/"));
        assert!(is_active_link("./destinos.html", "/destinos.html"));
        assert!(!is_active_link("contato.html", "/destinos.html"));
    }

    #[test]
    fn package_titles_fall_back_to_custom() {
        assert_eq!(package_title("familia"), "Pacote para Família");
        assert_eq!(package_title("luxo"), "Pacote Personalizado");
        assert!(package_message("casais").starts_with("Você selecionou o Pacote para Casais!"));
    }

    #[test]
    fn progress_style_resets_then_fills() {
        assert_eq!(progress_style(75, ProgressPhase::Reset), "width: 0%;");
        assert_eq!(
            progress_style(75, ProgressPhase::Filling),
            "width: 75%; transition: width 1.5s ease-in-out;"
        );
        assert!(progress_style(150, ProgressPhase::Filling).starts_with("width: 100%;"));
    }
}

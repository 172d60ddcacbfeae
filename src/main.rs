//! Main module for the group-trip site using Yew.
//! Wires section components, state hooks, and browser side effects.

use group_trip::{
    calculate_costs,
    catalog::{self, FILTER_OPTIONS, PACKAGES, PROGRESS_GOALS},
    current_page, defaults, format_input_date, guard_end_date, is_active_link, package_message,
    split_costs, ContactForm, CostOutcome, CostSplit, DestinationFilter, FormError, GroupTripForm,
    MenuState, ProgressPhase,
};
use log::{debug, info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;
mod dialog;
mod hooks;
mod logger;
mod utils;

use components::{
    render_slides, CostSummary, DestinationCard, PackageCard, ProgressBar, SliderDots,
};
use config::*;
use dialog::{notify, notify_error};
use hooks::{use_delayed_flag, use_field, use_slider};
use utils::{current_path, event_value, today_input_value};

// ──────────────────────────────────────────────────────────────────────────────
// Pages

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Destinations,
    Planning,
    Contact,
}

impl Page {
    fn from_path(path: &str) -> Self {
        match current_page(path) {
            PAGE_DESTINATIONS => Page::Destinations,
            PAGE_PLANNING => Page::Planning,
            PAGE_CONTACT => Page::Contact,
            _ => Page::Home,
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Header & mobile menu

#[derive(Properties, PartialEq)]
struct HeaderProps {
    path: AttrValue,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let menu = use_state(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggle()))
    };

    // Following a link closes the open menu; navigation itself is untouched
    let on_link = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            if menu.is_open() {
                menu.set(menu.after_navigation());
            }
        })
    };

    html! {
        <header class="header">
            <nav class="navbar">
                <a href={PAGE_HOME} class="logo">
                    <i class="fas fa-plane-departure"></i>
                    { " ViajeJunto" }
                </a>
                <ul class={classes!("nav-menu", menu.is_open().then_some("active"))}>
                    { NAV_LINKS.iter().map(|&(href, label)| {
                        html! {
                            <li>
                                <a {href}
                                   class={classes!(is_active_link(href, &props.path).then_some("active"))}
                                   onclick={on_link.clone()}>
                                    { label }
                                </a>
                            </li>
                        }
                    }).collect::<Html>() }
                </ul>
                <button class="mobile-menu-btn"
                    aria-label="Menu"
                    aria-expanded={menu.aria_expanded()}
                    onclick={toggle_menu}
                >
                    <i class={menu.icon_class()}></i>
                </button>
            </nav>
        </header>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Hero slider

#[function_component(HeroSlider)]
fn hero_slider() -> Html {
    let slides = catalog::slides();
    let handle = use_slider(slides.len(), defaults::AUTO_SLIDE_MS);

    if slides.is_empty() {
        return html! {};
    }

    let current = handle.slider.current();
    html! {
        <section class="hero-slider">
            <div class="slider-container"
                onmouseenter={handle.pause.clone()}
                onmouseleave={handle.resume.clone()}
            >
                { render_slides(slides, current) }
                <button id="prevBtn" class="slider-btn prev" aria-label="Anterior" onclick={handle.prev.clone()}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <button id="nextBtn" class="slider-btn next" aria-label="Próximo" onclick={handle.next.clone()}>
                    <i class="fas fa-chevron-right"></i>
                </button>
                <SliderDots count={slides.len()} {current} onselect={handle.go_to.clone()} />
            </div>
        </section>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Destinations

#[function_component(DestinationsSection)]
fn destinations_section() -> Html {
    let filter = use_state(DestinationFilter::default);
    let destinations = catalog::destinations();

    html! {
        <section class="destinos" id="destinos">
            <h2 class="section-title">{ "Destinos para o seu grupo" }</h2>
            <div class="filtros">
                { FILTER_OPTIONS.iter().map(|&(value, label)| {
                    let onclick = {
                        let filter = filter.clone();
                        Callback::from(move |_: MouseEvent| {
                            info!("Destination filter: {}", value);
                            filter.set(DestinationFilter::from_attr(value));
                        })
                    };
                    html! {
                        <button
                            class={classes!("filtro-btn", (filter.as_attr() == value).then_some("active"))}
                            data-filter={value}
                            {onclick}
                        >
                            { label }
                        </button>
                    }
                }).collect::<Html>() }
            </div>
            <div class="destinos-grid">
                { destinations.iter().map(|d| html! {
                    <DestinationCard key={d.id.clone()} destination={d.clone()} filter={(*filter).clone()} />
                }).collect::<Html>() }
            </div>
        </section>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Contact form

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let name = use_field("");
    let email = use_field("");
    let message = use_field("");
    let email_ref = use_node_ref();

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let email_ref = email_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ContactForm {
                name: name.value.clone(),
                email: email.value.clone(),
                message: message.value.clone(),
            };
            match form.validate() {
                Ok(request) => {
                    info!("Contact request accepted for {}", request.email);
                    notify(&request.confirmation());
                    for field in [&name, &email, &message] {
                        field.set.emit(String::new());
                    }
                }
                Err(err) => {
                    warn!("Contact form rejected: {:?}", err);
                    notify_error(&err);
                    if err == FormError::InvalidEmail {
                        if let Some(input) = email_ref.cast::<HtmlInputElement>() {
                            let _ = input.focus();
                        }
                    }
                }
            }
        })
    };

    html! {
        <section class="contato" id="contato">
            <h2 class="section-title">{ "Fale com a gente" }</h2>
            <form id="contactForm" class="contact-form" {onsubmit} novalidate=true>
                <div class="form-group">
                    <label for="nome">{ "Nome *" }</label>
                    <input type="text" id="nome" value={name.value.clone()} oninput={name.on_input.clone()} />
                </div>
                <div class="form-group">
                    <label for="email">{ "E-mail *" }</label>
                    <input type="email" id="email" ref={email_ref}
                        value={email.value.clone()} oninput={email.on_input.clone()} />
                </div>
                <div class="form-group">
                    <label for="mensagem">{ "Mensagem *" }</label>
                    <textarea id="mensagem" rows="5"
                        value={message.value.clone()} oninput={message.on_input.clone()} />
                </div>
                <button type="submit" class="btn-primary">{ "Enviar" }</button>
            </form>
        </section>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Cost calculator

/// Run the calculator over the field texts and publish the result.
fn apply_costs(
    total: &str,
    people: &str,
    extra: &str,
    split: &UseStateHandle<CostSplit>,
    set_people: &Callback<String>,
) {
    match calculate_costs(total, people, extra) {
        CostOutcome::Split(result) => split.set(result),
        CostOutcome::ResetPeople => set_people.emit("1".to_string()),
    }
}

#[function_component(CostCalculator)]
fn cost_calculator() -> Html {
    let total = use_field(DEFAULT_TOTAL_COST);
    let people = use_field(DEFAULT_PEOPLE);
    let extra = use_field(DEFAULT_EXTRA_COST);
    let split = use_state(|| split_costs(0.0, 1, 0.0));

    // Recompute on every field change, and once on mount
    {
        let split = split.clone();
        let set_people = people.set.clone();
        use_effect_with(
            (total.value.clone(), people.value.clone(), extra.value.clone()),
            move |(total, people, extra)| {
                apply_costs(total, people, extra, &split, &set_people);
                || ()
            },
        );
    }

    let on_calculate = {
        let (t, p, x) = (total.value.clone(), people.value.clone(), extra.value.clone());
        let split = split.clone();
        let set_people = people.set.clone();
        Callback::from(move |_: MouseEvent| apply_costs(&t, &p, &x, &split, &set_people))
    };

    html! {
        <section class="calculadora" id="calculadora">
            <h2 class="section-title">{ "Calculadora de divisão de custos" }</h2>
            <div class="calculadora-grid">
                <div class="form-group">
                    <label for="totalCustos">{ "Custo total da viagem (R$)" }</label>
                    <input type="number" id="totalCustos" min="0" step="0.01"
                        value={total.value.clone()} oninput={total.on_input.clone()} />
                </div>
                <div class="form-group">
                    <label for="numPessoas">{ "Número de pessoas" }</label>
                    <input type="number" id="numPessoas" min="1" step="1"
                        value={people.value.clone()} oninput={people.on_input.clone()} />
                </div>
                <div class="form-group">
                    <label for="despesasExtras">{ "Despesas extras por pessoa (R$)" }</label>
                    <input type="number" id="despesasExtras" min="0" step="0.01"
                        value={extra.value.clone()} oninput={extra.on_input.clone()} />
                </div>
                <button id="calcularCustos" class="btn-primary" onclick={on_calculate}>
                    { "Calcular" }
                </button>
            </div>
            <CostSummary split={*split} />
        </section>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Group trip modal

#[derive(Properties, PartialEq)]
struct GroupTripModalProps {
    open: bool,
    on_close: Callback<()>,
}

#[function_component(GroupTripModal)]
fn group_trip_modal(props: &GroupTripModalProps) -> Html {
    let name = use_field("");
    let people = use_field("");
    let start = use_field("");
    let end = use_field("");
    let today = use_memo((), |_| today_input_value());
    let end_min = {
        let today = today.clone();
        use_state(move || (*today).clone())
    };

    // Keep the end date at least a week after the start date
    let on_start_change = {
        let set_start = start.set.clone();
        let set_end = end.set.clone();
        let end_value = end.value.clone();
        let end_min = end_min.clone();
        Callback::from(move |e: Event| {
            let value = event_value(&e);
            set_start.emit(value.clone());
            if let Some(bound) = guard_end_date(&value, &end_value) {
                end_min.set(format_input_date(bound.min));
                if let Some(corrected) = bound.corrected {
                    set_end.emit(format_input_date(corrected));
                }
            }
        })
    };

    let onsubmit = {
        let fields = [name.clone(), people.clone(), start.clone(), end.clone()];
        let end_min = end_min.clone();
        let today = today.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let [name, people, start, end] = &fields;
            let form = GroupTripForm {
                name: name.value.clone(),
                people: people.value.clone(),
                start: start.value.clone(),
                end: end.value.clone(),
            };
            match form.validate() {
                Ok(trip) => {
                    info!("Group '{}' created for {} people", trip.name, trip.people);
                    notify(&trip.confirmation());
                    for field in &fields {
                        field.set.emit(String::new());
                    }
                    end_min.set((*today).clone());
                    on_close.emit(());
                }
                Err(err) => {
                    warn!("Group form rejected: {:?}", err);
                    notify_error(&err);
                }
            }
        })
    };

    // Only a click on the overlay itself closes the modal, not one inside it
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div id="modalOverlay" class="modal-overlay"
             style={if props.open { "display: flex" } else { "display: none" }}
             onclick={on_overlay_click}>
            <div class="modal-content">
                <button id="modalClose" class="modal-close" aria-label="Fechar" onclick={close.clone()}>
                    <i class="fas fa-times"></i>
                </button>
                <h2>{ "Criar grupo de viagem" }</h2>
                <form id="formGrupoViagem" {onsubmit}>
                    <div class="form-group">
                        <label for="nomeGrupo">{ "Nome do grupo" }</label>
                        <input type="text" id="nomeGrupo" required=true
                            value={name.value.clone()} oninput={name.on_input.clone()} />
                    </div>
                    <div class="form-group">
                        <label for="qtdPessoas">{ "Quantidade de pessoas" }</label>
                        <input type="number" id="qtdPessoas" min="2" required=true
                            value={people.value.clone()} oninput={people.on_input.clone()} />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="dataInicio">{ "Data de início" }</label>
                            <input type="date" id="dataInicio" required=true
                                min={(*today).clone()}
                                value={start.value.clone()}
                                oninput={start.on_input.clone()}
                                onchange={on_start_change} />
                        </div>
                        <div class="form-group">
                            <label for="dataFim">{ "Data de término" }</label>
                            <input type="date" id="dataFim" required=true
                                min={(*end_min).clone()}
                                value={end.value.clone()}
                                oninput={end.on_input.clone()} />
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button type="button" id="cancelarGrupo" class="btn-secondary" onclick={close}>
                            { "Cancelar" }
                        </button>
                        <button type="submit" class="btn-primary">{ "Criar grupo" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Packages & progress

#[function_component(PackagesSection)]
fn packages_section() -> Html {
    let onselect = Callback::from(|kind: &'static str| notify(&package_message(kind)));
    html! {
        <section class="pacotes" id="pacotes">
            <h2 class="section-title">{ "Pacotes para grupos" }</h2>
            <div class="pacotes-grid">
                { PACKAGES.iter().map(|package| html! {
                    <PackageCard key={package.kind} package={*package} onselect={onselect.clone()} />
                }).collect::<Html>() }
            </div>
        </section>
    }
}

#[function_component(ProgressSection)]
fn progress_section() -> Html {
    let filling = use_delayed_flag(PROGRESS_START_DELAY_MS + PROGRESS_REPAINT_DELAY_MS);
    let phase = if filling {
        ProgressPhase::Filling
    } else {
        ProgressPhase::Reset
    };
    html! {
        <section class="progresso" id="progresso">
            <h2 class="section-title">{ "Como está o planejamento" }</h2>
            { PROGRESS_GOALS.iter().map(|goal| html! {
                <ProgressBar key={goal.label} goal={*goal} {phase} />
            }).collect::<Html>() }
        </section>
    }
}

#[function_component(PlanningPage)]
fn planning_page() -> Html {
    let modal_open = use_state(|| false);
    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    html! {
        <>
            <section class="planejamento-hero">
                <h1>{ "Planeje a viagem do seu grupo" }</h1>
                <p>{ "Crie o grupo, convide os amigos e divida os custos sem planilhas." }</p>
                <button class="btn-primary btn-abrir-modal-grupo" onclick={open_modal.clone()}>
                    { "Criar grupo de viagem" }
                </button>
            </section>
            <CostCalculator />
            <PackagesSection />
            <ProgressSection />
            <section class="cta-grupo">
                <h2>{ "Pronto para começar?" }</h2>
                <button class="btn-primary btn-abrir-modal-grupo" onclick={open_modal}>
                    { "Criar meu grupo" }
                </button>
            </section>
            <GroupTripModal open={*modal_open} on_close={close_modal} />
        </>
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Root component: header, the page matching the current path, footer.
#[function_component]
pub fn App() -> Html {
    let path = use_memo((), |_| current_path());
    let page = Page::from_path(&path);
    debug!("Rendering page {:?} for path '{}'", page, path);

    html! {
        <>
            <Header path={AttrValue::from((*path).clone())} />
            <main>
                { match page {
                    Page::Home => html! {
                        <>
                            <HeroSlider />
                            <DestinationsSection />
                        </>
                    },
                    Page::Destinations => html! { <DestinationsSection /> },
                    Page::Planning => html! { <PlanningPage /> },
                    Page::Contact => html! { <ContactSection /> },
                } }
            </main>
            <footer class="footer">
                <p>{ "© ViajeJunto. Viagens em grupo sem complicação." }</p>
            </footer>
        </>
    }
}

/// Entry point: installs panic/log hooks and renders the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    logger::init(LOG_LEVEL);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_follow_path_file_name() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/index.html"), Page::Home);
        assert_eq!(Page::from_path("/destinos.html"), Page::Destinations);
        assert_eq!(Page::from_path("/site/planejamento.html"), Page::Planning);
        assert_eq!(Page::from_path("/contato.html"), Page::Contact);
        assert_eq!(Page::from_path("/sobre.html"), Page::Home);
    }
}

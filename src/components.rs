//! Pure Yew view components for the site.
//!
//! This module contains stateless components that render based on props;
//! state lives in the section components in `main.rs`.

use group_trip::catalog::{Destination, Package, ProgressGoal, Slide};
use group_trip::{format_brl, progress_style, CostSplit, DestinationFilter, ProgressPhase};
use yew::prelude::*;

/// Renders the hero slides; only the current one carries `active`.
pub fn render_slides(slides: &[Slide], current: usize) -> Html {
    slides
        .iter()
        .enumerate()
        .map(|(idx, slide)| {
            html! {
                <div class={classes!("slide", (idx == current).then_some("active"))}
                     style={format!("background-image: url('{}')", slide.image)}>
                    <div class="slide-content">
                        <h2>{ &slide.title }</h2>
                        <p>{ &slide.subtitle }</p>
                    </div>
                </div>
            }
        })
        .collect()
}

/// Indicator dots under the slider.
#[derive(Properties, PartialEq)]
pub struct SliderDotsProps {
    pub count: usize,
    pub current: usize,
    pub onselect: Callback<usize>,
}

#[function_component(SliderDots)]
pub fn slider_dots(props: &SliderDotsProps) -> Html {
    html! {
        <div class="slider-dots">
            { (0..props.count).map(|idx| {
                let onselect = props.onselect.clone();
                html! {
                    <span
                        class={classes!("slider-dot", (idx == props.current).then_some("active"))}
                        onclick={Callback::from(move |_: MouseEvent| onselect.emit(idx))}
                    />
                }
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DestinationCardProps {
    pub destination: Destination,
    pub filter: DestinationFilter,
}

#[function_component(DestinationCard)]
pub fn destination_card(props: &DestinationCardProps) -> Html {
    let d = &props.destination;
    html! {
        <div class="destino-card"
             data-categoria={d.category.clone()}
             style={format!("display: {}", props.filter.display_for(&d.category))}>
            <img src={d.image.clone()} alt={d.name.clone()} loading="lazy" />
            <div class="destino-info">
                <h3>{ &d.name }</h3>
                <p>{ &d.description }</p>
                <span class="destino-preco">{ format!("A partir de {}", format_brl(d.price)) }</span>
            </div>
        </div>
    }
}

/// The three calculator outputs.
#[derive(Properties, PartialEq)]
pub struct CostSummaryProps {
    pub split: CostSplit,
}

#[function_component(CostSummary)]
pub fn cost_summary(props: &CostSummaryProps) -> Html {
    html! {
        <div class="resultado-calculo">
            <div class="resultado-item">
                <span>{ "Valor por pessoa:" }</span>
                <strong id="valorPorPessoa">{ format_brl(props.split.per_person) }</strong>
            </div>
            <div class="resultado-item">
                <span>{ "Total por pessoa com extras:" }</span>
                <strong id="totalComExtras">{ format_brl(props.split.per_person_with_extra) }</strong>
            </div>
            <div class="resultado-item destaque">
                <span>{ "Valor total do grupo:" }</span>
                <strong id="valorTotalGrupo">{ format_brl(props.split.group_total) }</strong>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PackageCardProps {
    pub package: Package,
    pub onselect: Callback<&'static str>,
}

#[function_component(PackageCard)]
pub fn package_card(props: &PackageCardProps) -> Html {
    let kind = props.package.kind;
    let onclick = props.onselect.reform(move |_: MouseEvent| kind);
    html! {
        <div class="pacote-card">
            <i class={props.package.icon}></i>
            <h3>{ props.package.name }</h3>
            <p>{ props.package.description }</p>
            <button class="btn-pacote" data-pacote={kind} {onclick}>
                { "Personalizar pacote" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub goal: ProgressGoal,
    pub phase: ProgressPhase,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="progresso-item">
            <div class="progresso-label">
                <span>{ props.goal.label }</span>
                <span>{ format!("{}%", props.goal.percent) }</span>
            </div>
            <div class="progresso-bar">
                <div class="progresso-fill" style={progress_style(props.goal.percent, props.phase)}></div>
            </div>
        </div>
    }
}

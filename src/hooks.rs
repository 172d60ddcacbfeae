use gloo_timers::callback::{Interval, Timeout};
use group_trip::{Slider, Step};
use std::rc::Rc;
use yew::prelude::*;

use crate::utils::event_value;

/// Holds the state and callbacks for a plain form field.
#[derive(Clone)]
pub struct Field {
    /// The current text content of the field.
    pub value: String,
    /// Callback for the field's `oninput` event.
    pub on_input: Callback<InputEvent>,
    /// Callback to programmatically replace the text.
    pub set: Callback<String>,
}

/// Custom hook to manage a controlled `<input>` / `<textarea>`.
#[hook]
pub fn use_field(initial: &'static str) -> Field {
    let value = use_state(|| initial.to_string());

    let on_input = {
        let setter = value.clone();
        Callback::from(move |e: InputEvent| setter.set(event_value(&e)))
    };

    let set = {
        let setter = value.clone();
        Callback::from(move |text: String| setter.set(text))
    };

    Field {
        value: (*value).clone(),
        on_input,
        set,
    }
}

/// Actions accepted by the slider reducer.
pub enum SliderAction {
    Step(Step),
    GoTo(usize),
    Pause,
    Resume,
}

#[derive(Clone, PartialEq)]
struct SliderModel(Slider);

impl Reducible for SliderModel {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut slider = self.0.clone();
        let changed = match action {
            SliderAction::Step(step) => slider.advance(step),
            SliderAction::GoTo(index) => slider.go_to(index),
            SliderAction::Pause => slider.pause(),
            SliderAction::Resume => slider.resume(),
        };
        if changed {
            Rc::new(SliderModel(slider))
        } else {
            self
        }
    }
}

/// Slider snapshot plus the callbacks that drive it.
#[derive(Clone)]
pub struct SliderHandle {
    pub slider: Slider,
    pub next: Callback<MouseEvent>,
    pub prev: Callback<MouseEvent>,
    pub go_to: Callback<usize>,
    pub pause: Callback<MouseEvent>,
    pub resume: Callback<MouseEvent>,
}

/// Custom hook owning the slider state and its autoplay timer.
///
/// The `Interval` lives inside an effect keyed on the slider revision and the
/// pause flag: every navigation or hover change drops (cancels) the running
/// interval before a new one is scheduled, so at most one timer exists.
#[hook]
pub fn use_slider(len: usize, interval_ms: u32) -> SliderHandle {
    let model = use_reducer(move || SliderModel(Slider::new(len)));

    {
        let dispatcher = model.dispatcher();
        let deps = (model.0.revision(), model.0.autoplay_armed());
        use_effect_with(deps, move |&(_, armed)| {
            let interval = armed.then(|| {
                Interval::new(interval_ms, move || {
                    dispatcher.dispatch(SliderAction::Step(Step::Forward));
                })
            });
            move || drop(interval)
        });
    }

    let dispatch_on_click = |make: fn() -> SliderAction| {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(make()))
    };

    let go_to = {
        let dispatcher = model.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(SliderAction::GoTo(index)))
    };

    SliderHandle {
        slider: model.0.clone(),
        next: dispatch_on_click(|| SliderAction::Step(Step::Forward)),
        prev: dispatch_on_click(|| SliderAction::Step(Step::Backward)),
        go_to,
        pause: dispatch_on_click(|| SliderAction::Pause),
        resume: dispatch_on_click(|| SliderAction::Resume),
    }
}

/// Returns `false` until `delay_ms` after mount, then `true`.
#[hook]
pub fn use_delayed_flag(delay_ms: u32) -> bool {
    let flag = use_state(|| false);
    {
        let flag = flag.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(delay_ms, move || flag.set(true));
            move || drop(timeout)
        });
    }
    *flag
}

use std::rc::Rc;

use mutable_state::{InitialState, SetState, SetStateAction, use_mutable_state};
use mutable_state_runtime::{Component, use_unmount};

type Formatter = Rc<dyn Fn(i32) -> String>;

struct CounterView {
    label: String,
    count: SetState<i32>,
    format: SetState<Formatter>,
}

fn counter() -> anyhow::Result<CounterView> {
    let (count, set_count) = use_mutable_state(|| {
        log::info!("computing initial count");
        0
    })?;
    // a function stored as state, not an updater
    let plain: Formatter = Rc::new(|n: i32| format!("Count: {n}"));
    let (format, set_format) = use_mutable_state(InitialState::value(plain))?;

    use_unmount(|| log::info!("counter unmounted"))?;

    Ok(CounterView {
        label: format(*count),
        count: set_count,
        format: set_format,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (mut component, view) = Component::mount(counter);
    let mut view = view?;
    log::info!("{}", view.label);

    view.count.set(5);
    view = component.flush().transpose()?.unwrap_or(view);
    log::info!("{}", view.label);

    view.count.dispatch(SetStateAction::update(|prev: &i32| prev + 1));
    view = component.flush().transpose()?.unwrap_or(view);
    log::info!("{}", view.label);

    let loud: Formatter = Rc::new(|n: i32| format!("COUNT IS {n}!"));
    view.format.set(loud);
    view = component.flush().transpose()?.unwrap_or(view);
    log::info!("{}", view.label);

    log::info!("rendered {} times", component.render_count());
    component.unmount();
    Ok(())
}

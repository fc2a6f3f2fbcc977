use yew::Callback;

/// A callback that runs `f(deps)` as a local task on every emit, ignoring
/// the event value.
pub fn async_callback<Deps, F, Fut, E>(deps: Deps, f: F) -> Callback<E>
where
    Deps: Clone + 'static,
    F: Fn(Deps) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    Callback::from(move |_| {
        let deps = deps.clone();
        wasm_bindgen_futures::spawn_local(f(deps));
    })
}

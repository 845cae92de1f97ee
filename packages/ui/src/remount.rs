use dioxus::prelude::*;

/// Renders `children` under `remount_key`. Changing the key drops the old
/// subtree with all of its hooks and mounts a fresh one.
///
/// Keys only take effect on the first root of a list, so the keyed node is
/// wrapped in a one-item iterator.
#[component]
pub fn Remount(remount_key: String, children: Element) -> Element {
    rsx! {
        {std::iter::once(rsx! {
            Keyed { key: "{remount_key}", {children} }
        })}
    }
}

#[component]
fn Keyed(children: Element) -> Element {
    children
}

//! Producers of context data.

use crate::context::DataContext;

/// A component that contributes bindings to an event's [`DataContext`].
///
/// List views, detail views and toolwindows implement this to expose their current
/// state to actions without knowing who consumes it.
pub trait DataProvider {
    fn provide(&self, context: &mut DataContext);
}

impl<F> DataProvider for F
where
    F: Fn(&mut DataContext),
{
    fn provide(&self, context: &mut DataContext) {
        self(context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::DataKey;

    const LABEL: DataKey<&'static str> = DataKey::new("test.label");
    const DEPTH: DataKey<u8> = DataKey::new("test.depth");

    #[test]
    fn nearest_provider_wins() {
        let focused = |ctx: &mut DataContext| ctx.set(&LABEL, "focused");
        let parent = |ctx: &mut DataContext| {
            ctx.set(&LABEL, "parent");
            ctx.set(&DEPTH, 1);
        };

        let ctx = DataContext::from_providers([
            &focused as &dyn DataProvider,
            &parent as &dyn DataProvider,
        ]);

        assert_eq!(ctx.get(&LABEL), Some(&"focused"));
        assert_eq!(ctx.get(&DEPTH), Some(&1));
    }

    #[test]
    fn no_providers_yield_empty_context() {
        let ctx = DataContext::from_providers(std::iter::empty::<&dyn DataProvider>());
        assert!(ctx.is_empty());
    }
}

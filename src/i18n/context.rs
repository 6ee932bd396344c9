//! Language context: the active language, `t(key)`, and direction propagation.
//!
//! A `LanguageContext` is an explicit object handed to whatever renders text.
//! It is single-threaded (interior mutability through `Cell`/`RefCell`); the
//! server builds one per request from the session cookie.
//!
//! `LanguageProvider::mount` makes a context ambient for a rendering pass so
//! deeply nested views can call `use_language()` instead of threading the
//! context through every signature. Calling `use_language()` with nothing
//! mounted panics immediately.

use crate::i18n::{Direction, I18nError, Language, TranslationRegistry};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

/// The `dir`/`lang` attributes of the host document's root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub dir: Direction,
    pub lang: Language,
}

impl DocumentAttributes {
    /// Attributes consistent with `language`.
    pub fn for_language(language: Language) -> Self {
        Self {
            dir: language.direction(),
            lang: language,
        }
    }

    /// Attribute string for the `<html>` element, e.g. `lang="he" dir="rtl"`.
    pub fn html_attributes(&self) -> String {
        format!(r#"lang="{}" dir="{}""#, self.lang.code(), self.dir.as_str())
    }
}

/// Handle returned by [`LanguageContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(usize);

type Listener = Rc<dyn Fn(Language)>;

/// Active language selection plus translation lookup.
pub struct LanguageContext {
    registry: &'static TranslationRegistry,
    language: Cell<Language>,
    document: Cell<DocumentAttributes>,
    listeners: RefCell<Vec<(Subscription, Listener)>>,
    next_subscription: Cell<usize>,
}

impl LanguageContext {
    /// Create a context with `language` active, backed by the global registry.
    pub fn new(language: Language) -> Self {
        Self::with_registry(TranslationRegistry::get(), language)
    }

    pub fn with_registry(registry: &'static TranslationRegistry, language: Language) -> Self {
        Self {
            registry,
            language: Cell::new(language),
            document: Cell::new(DocumentAttributes::for_language(language)),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Resolve `key` for the active language, or return `key` unchanged.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.registry.lookup(self.language.get(), key)
    }

    /// Switch the active language.
    ///
    /// On a change this re-synchronises the document attributes and then
    /// notifies every subscriber with the new language. Setting the language
    /// that is already active does nothing.
    pub fn set_language(&self, language: Language) {
        let previous = self.language.replace(language);
        if previous == language {
            return;
        }

        self.document.set(DocumentAttributes::for_language(language));
        debug!(
            "Language changed {} -> {} (dir={})",
            previous,
            language,
            language.direction()
        );

        // Snapshot so listeners may subscribe/unsubscribe while being notified
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(language);
        }
    }

    /// Switch to the other language and return it.
    pub fn toggle(&self) -> Language {
        let next = self.language.get().toggled();
        self.set_language(next);
        next
    }

    /// Current document attributes, as last propagated.
    pub fn document(&self) -> DocumentAttributes {
        self.document.get()
    }

    /// Register a view to re-render on language changes.
    pub fn subscribe(&self, listener: impl Fn(Language) + 'static) -> Subscription {
        let id = Subscription(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription);
        listeners.len() != before
    }

    /// Label for the language toggle control (the language it switches to).
    pub fn toggle_label(&self) -> &'static str {
        self.registry.config(self.language.get()).toggle_label
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl std::fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageContext")
            .field("language", &self.language.get())
            .field("document", &self.document.get())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

thread_local! {
    static MOUNTED: RefCell<Vec<Rc<LanguageContext>>> = const { RefCell::new(Vec::new()) };
}

/// Scopes a `LanguageContext` so nested views can reach it via `use_language`.
pub struct LanguageProvider;

/// Pops the mounted context when the scope ends, including on unwind.
struct MountGuard;

impl Drop for MountGuard {
    fn drop(&mut self) {
        MOUNTED.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

impl LanguageProvider {
    /// Run `body` with `context` mounted on the current thread.
    ///
    /// Mounts nest; the innermost one wins.
    pub fn mount<R>(context: Rc<LanguageContext>, body: impl FnOnce() -> R) -> R {
        MOUNTED.with(|stack| stack.borrow_mut().push(context));
        let _guard = MountGuard;
        body()
    }
}

/// The innermost mounted context, or `ContextUnmounted`.
pub fn try_use_language() -> Result<Rc<LanguageContext>, I18nError> {
    MOUNTED.with(|stack| stack.borrow().last().cloned().ok_or(I18nError::ContextUnmounted))
}

/// The innermost mounted context.
///
/// # Panics
/// Panics when no `LanguageProvider` is mounted on this thread.
pub fn use_language() -> Rc<LanguageContext> {
    match try_use_language() {
        Ok(context) => context,
        Err(e) => panic!("{}", e),
    }
}

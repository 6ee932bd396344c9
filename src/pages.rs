//! Server-rendered pages.
//!
//! Only the document shell and the text the i18n layer feeds are rendered
//! here; styling and client-side animation live in static assets. Every page
//! is rendered inside a `LanguageProvider`, and the root element carries the
//! active language's `lang`/`dir` attributes.

use crate::i18n::{use_language, LanguageContext, LanguageProvider};
use crate::volunteer::{Field, AREA_OPTIONS, AVAILABILITY_OPTIONS};
use std::fmt::Write;
use std::rc::Rc;

/// Routes reachable from the navigation bar: (href, translation key).
const NAV_LINKS: &[(&str, &str)] = &[
    ("/#home", "nav.home"),
    ("/#about", "nav.about"),
    ("/#programs", "nav.programs"),
    ("/#get-involved", "nav.getInvolved"),
    ("/#contact", "nav.contact"),
    ("/gallery", "nav.gallery"),
];

const PROGRAMS: &[&str] = &["elderly", "youth", "environment"];

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Translate and escape in one step, using the mounted context.
fn tr(key: &str) -> String {
    escape_html(use_language().t(key))
}

/// Render the home page.
pub fn home(ctx: Rc<LanguageContext>) -> String {
    LanguageProvider::mount(ctx, || document("home.title", &home_body()))
}

/// Render the gallery page.
pub fn gallery(ctx: Rc<LanguageContext>) -> String {
    LanguageProvider::mount(ctx, || document("gallery.title", &gallery_body()))
}

fn document(title_key: &str, main: &str) -> String {
    let ctx = use_language();
    let attrs = ctx.document().html_attributes();

    format!(
        r##"<!DOCTYPE html>
<html {attrs}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
<meta name="description" content="{description}">
</head>
<body>
<a class="skip-link" href="#main-content">{skip}</a>
{header}
<main id="main-content" tabindex="-1">
{main}
</main>
{footer}
</body>
</html>
"##,
        title = tr(title_key),
        site = tr("site.title"),
        description = tr("home.description"),
        skip = tr("accessibility.skipToMain"),
        header = header(),
        footer = footer(),
    )
}

fn header() -> String {
    let ctx = use_language();
    let mut nav = String::new();
    for (href, key) in NAV_LINKS {
        let _ = writeln!(nav, r#"<li><a href="{}">{}</a></li>"#, href, tr(key));
    }

    format!(
        r#"<header>
<a href="/" class="brand">{site}</a>
<nav aria-label="{nav_label}">
<ul>
{nav}</ul>
</nav>
<a href="/#donate" class="donate">{donate}</a>
<a href="/lang/toggle" class="lang-toggle" aria-label="{toggle_label}" hreflang="{target}">{toggle}</a>
</header>"#,
        site = tr("site.title"),
        nav_label = tr("accessibility.mainNavigation"),
        donate = tr("nav.donate"),
        toggle_label = tr("lang.toggle"),
        target = ctx.language().toggled().code(),
        toggle = escape_html(ctx.toggle_label()),
    )
}

fn footer() -> String {
    format!(
        r#"<footer>
<p>{copyright}</p>
<p>{credits}</p>
</footer>"#,
        copyright = tr("footer.copyright"),
        credits = tr("footer.credits"),
    )
}

fn home_body() -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        r#"<section id="home" class="hero">
<h1>{headline}</h1>
<p>{tagline}</p>
<a href="/#get-involved">{join}</a>
<a href="/#donate">{donate}</a>
</section>
<section id="about">
<h2>{about}</h2>
<h3>{mission_title}</h3>
<p>{mission}</p>
</section>
<section id="programs">
<h2>{programs_title}</h2>
<p>{programs_subtitle}</p>
"#,
        headline = tr("home.hero.headline"),
        tagline = tr("home.hero.tagline"),
        join = tr("home.hero.joinUs"),
        donate = tr("home.hero.donateNow"),
        about = tr("home.about.title"),
        mission_title = tr("home.about.mission.title"),
        mission = tr("home.about.mission.description"),
        programs_title = tr("home.programs.title"),
        programs_subtitle = tr("home.programs.subtitle"),
    );

    for program in PROGRAMS {
        let _ = writeln!(
            body,
            "<article><h3>{}</h3><p>{}</p></article>",
            tr(&format!("home.programs.{}.title", program)),
            tr(&format!("home.programs.{}.description", program)),
        );
    }
    body.push_str("</section>\n");

    body.push_str(&volunteer_form());

    let _ = write!(
        body,
        r#"<section id="contact">
<h2>{title}</h2>
<p>{subtitle}</p>
<dl>
<dt>{email}</dt><dd>{email_value}</dd>
<dt>{phone}</dt><dd>{phone_value}</dd>
<dt>{address}</dt><dd>{address_value}</dd>
<dt>{hours}</dt><dd>{hours_value}</dd>
</dl>
</section>"#,
        title = tr("home.contact.title"),
        subtitle = tr("home.contact.subtitle"),
        email = tr("home.contact.email"),
        email_value = tr("home.contact.email.value"),
        phone = tr("home.contact.phone"),
        phone_value = tr("home.contact.phone.value"),
        address = tr("home.contact.address"),
        address_value = tr("home.contact.address.value"),
        hours = tr("home.contact.hours"),
        hours_value = tr("home.contact.hours.value"),
    );

    body
}

fn volunteer_form() -> String {
    let mut form = String::new();

    let _ = write!(
        form,
        r#"<section id="get-involved">
<h2>{title}</h2>
<p>{subtitle}</p>
<form id="volunteer-form" data-endpoint="/api/volunteer" novalidate>
<h3>{form_title}</h3>
"#,
        title = tr("home.getInvolved.title"),
        subtitle = tr("home.getInvolved.subtitle"),
        form_title = tr("home.getInvolved.form.title"),
    );

    for (field, input_type) in [
        (Field::Name, "text"),
        (Field::Email, "email"),
        (Field::Phone, "tel"),
    ] {
        let _ = writeln!(
            form,
            r#"<label for="{name}">{label}</label><input id="{name}" name="{name}" type="{input_type}" required>"#,
            name = field.name(),
            label = tr(field.label_key()),
        );
    }

    form.push_str(&checkbox_group(Field::Area, "home.getInvolved.form.area", AREA_OPTIONS));
    form.push_str(&checkbox_group(
        Field::Availability,
        "home.getInvolved.form.availability",
        AVAILABILITY_OPTIONS,
    ));

    let _ = write!(
        form,
        r#"<label><input type="checkbox" name="consent" value="true" required> {consent}</label>
<button type="submit" data-submitting="{submitting}">{submit}</button>
</form>
</section>
"#,
        consent = tr(Field::Consent.label_key()),
        submitting = tr("home.getInvolved.form.submitting"),
        submit = tr("home.getInvolved.form.submit"),
    );

    form
}

fn checkbox_group(field: Field, prefix: &str, options: &[&str]) -> String {
    let mut group = format!("<fieldset>\n<legend>{}</legend>\n", tr(field.label_key()));
    for option in options {
        let _ = writeln!(
            group,
            r#"<label><input type="checkbox" name="{name}" value="{option}"> {label}</label>"#,
            name = field.name(),
            label = tr(&format!("{}.{}", prefix, option)),
        );
    }
    group.push_str("</fieldset>\n");
    group
}

fn gallery_body() -> String {
    format!(
        r#"<section class="gallery">
<h1>{title}</h1>
<p>{subtitle}</p>
</section>
<section class="gallery-cta">
<h2>{cta_title}</h2>
<p>{cta_description}</p>
<a href="/#get-involved">{volunteer}</a>
<a href="/#donate">{donate}</a>
</section>"#,
        title = tr("gallery.title"),
        subtitle = tr("gallery.subtitle"),
        cta_title = tr("gallery.cta.title"),
        cta_description = tr("gallery.cta.description"),
        volunteer = tr("gallery.cta.volunteer"),
        donate = tr("gallery.cta.donate"),
    )
}

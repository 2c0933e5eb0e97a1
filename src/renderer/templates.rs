//! Certificate layouts and the preview modal shell

use crate::certificate::{
    Attestation, BirthCertificate, Certificate, CertificateType, DeathCertificate,
    MarriageCertificate, Party, RegistryHeader,
};
use crate::stylesheet::Stylesheet;

use super::html::escape_html;
use super::{HtmlBuilder, HtmlConfig, SealImage};

/// Printed at the foot of every certificate
pub const DISCLAIMER: &str =
    "A mark, erasure or alteration of any entry invalidates this certification.";

const REPUBLIC: &str = "Republic of the Philippines";
const SALUTATION: &str = "TO WHOM IT MAY CONCERN:";

/// Render the preview modal, with the certificate body when one is given
pub fn render_modal(
    certificate: Option<&Certificate>,
    config: &HtmlConfig,
    stylesheet: &Stylesheet,
    seal: Option<&SealImage>,
) -> String {
    let mut builder = HtmlBuilder::new(config.clone());
    let prefix = builder.prefix();

    if config.standalone {
        let theme_color = stylesheet.resolve_or_default("accent-1");
        builder.raw("<!DOCTYPE html>");
        builder.open("html", &[("lang", "en")]);
        builder.open("head", &[]);
        builder.void("meta", &[("charset", "utf-8")]);
        builder.void(
            "meta",
            &[("name", "theme-color"), ("content", theme_color.as_str())],
        );
        builder.element("title", &[], &config.title);
        builder.open("style", &[]);
        for rule in stylesheet.css_rules(&prefix) {
            builder.raw(&rule);
        }
        builder.close();
        builder.close();
        builder.open("body", &[]);
    }

    let title_id = format!("{}preview-title", prefix);
    let dialog_class = builder.class("dialog");
    builder.open_classed("div", "overlay");
    builder.open(
        "div",
        &[
            ("class", dialog_class.as_str()),
            ("role", "dialog"),
            ("aria-modal", "true"),
            ("aria-labelledby", title_id.as_str()),
        ],
    );

    builder.open_classed("div", "dialog-header");
    let title_class = builder.class("dialog-title");
    builder.element(
        "h1",
        &[("id", title_id.as_str()), ("class", title_class.as_str())],
        &config.title,
    );
    builder.close();

    match certificate {
        Some(certificate) => {
            builder.open_classed("div", "dialog-body");
            render_certificate(certificate, seal, &mut builder);
            builder.close();
        }
        None => builder.element_classed("div", "dialog-body", ""),
    }

    builder.open_classed("div", "dialog-footer");
    let close_class = builder.class("button");
    builder.element(
        "button",
        &[
            ("type", "button"),
            ("class", close_class.as_str()),
            ("data-action", "close"),
        ],
        "Close",
    );
    let generate_class = builder.class("button button-primary");
    builder.element(
        "button",
        &[
            ("type", "button"),
            ("class", generate_class.as_str()),
            ("data-action", "generate"),
        ],
        "Generate Certificate",
    );

    builder.build()
}

/// Render one certificate; the match is the template selection
pub fn render_certificate(
    certificate: &Certificate,
    seal: Option<&SealImage>,
    builder: &mut HtmlBuilder,
) {
    let certificate_type = certificate.certificate_type();
    tracing::debug!(certificate_type = %certificate_type, "rendering certificate template");

    let class = builder.class(&format!("certificate certificate-{}", certificate_type));
    builder.open(
        "section",
        &[
            ("class", class.as_str()),
            ("data-certificate-type", certificate_type.as_str()),
        ],
    );
    render_header(certificate_type, certificate.header(), seal, builder);

    match certificate {
        Certificate::Birth(doc) => render_birth(doc, builder),
        Certificate::Marriage(doc) => render_marriage(doc, builder),
        Certificate::Death(doc) => render_death(doc, builder),
    }

    render_attestation(certificate.attestation(), builder);
    builder.close();
}

/// The register a certificate type is extracted from
fn register_terms(certificate_type: CertificateType) -> (&'static str, &'static str) {
    match certificate_type {
        CertificateType::Birth => ("birth", "Register of Births"),
        CertificateType::Marriage => ("marriage", "Register of Marriages"),
        CertificateType::Death => ("death", "Register of Deaths"),
    }
}

fn render_header(
    certificate_type: CertificateType,
    header: &RegistryHeader,
    seal: Option<&SealImage>,
    builder: &mut HtmlBuilder,
) {
    builder.open_classed("header", "header");

    let form_number = builder.value_span("form_number", header.form_number.as_deref());
    builder.inline_classed("p", "form-number", &form_number);

    if let Some(seal) = seal {
        let class = builder.class("seal");
        let src = seal.data_uri();
        builder.void(
            "img",
            &[
                ("class", class.as_str()),
                ("src", src.as_str()),
                ("alt", "Official seal"),
            ],
        );
    }

    builder.element_classed("p", "republic", REPUBLIC);
    let office_name = builder.value_span("office_name", header.office_name.as_deref());
    builder.inline_classed("p", "office-name", &office_name);
    let office_address = builder.value_span("office_address", header.office_address.as_deref());
    builder.inline_classed("p", "office-address", &office_address);
    let current_date = builder.value_span("current_date", header.current_date.as_deref());
    builder.inline_classed("p", "current-date", &current_date);

    builder.element_classed("h2", "certificate-title", certificate_type.title());
    builder.element_classed("p", "salutation", SALUTATION);

    let (facts_of, register) = register_terms(certificate_type);
    let statement = format!(
        "We certify that, among others, the following facts of {} appear in our {} on page {} of book number {}:",
        facts_of,
        register,
        builder.value_span("page_number", header.page_number.as_deref()),
        builder.value_span("book_number", header.book_number.as_deref()),
    );
    builder.inline_classed("p", "statement", &statement);
    builder.close();
}

fn open_facts(builder: &mut HtmlBuilder) {
    builder.open_classed("table", "facts");
    builder.open("tbody", &[]);
}

fn close_facts(builder: &mut HtmlBuilder) {
    builder.close();
    builder.close();
}

fn registry_rows(header: &RegistryHeader, builder: &mut HtmlBuilder) {
    builder.fact_row(
        "Registry number",
        "registry_number",
        header.registry_number.as_deref(),
    );
    builder.fact_row(
        "Date of registration",
        "date_of_registration",
        header.date_of_registration.as_deref(),
    );
}

fn render_birth(doc: &BirthCertificate, builder: &mut HtmlBuilder) {
    let facts = &doc.facts;
    open_facts(builder);
    registry_rows(&doc.header, builder);
    builder.fact_row("PRN", "prn", facts.prn.as_deref());
    builder.fact_row("Name of child", "child_name", facts.child_name.as_deref());
    builder.fact_row("Sex", "sex", facts.sex.as_deref());
    builder.fact_row("Date of birth", "date_of_birth", facts.date_of_birth.as_deref());
    builder.fact_row("Place of birth", "place_of_birth", facts.place_of_birth.as_deref());
    builder.fact_row("Name of mother", "mother_name", facts.mother_name.as_deref());
    builder.fact_row(
        "Citizenship of mother",
        "mother_citizenship",
        facts.mother_citizenship.as_deref(),
    );
    builder.fact_row("Name of father", "father_name", facts.father_name.as_deref());
    builder.fact_row(
        "Citizenship of father",
        "father_citizenship",
        facts.father_citizenship.as_deref(),
    );
    builder.fact_row(
        "Date of marriage of parents",
        "marriage_date",
        facts.marriage_date.as_deref(),
    );
    builder.fact_row(
        "Place of marriage of parents",
        "marriage_place",
        facts.marriage_place.as_deref(),
    );
    close_facts(builder);
}

fn render_marriage(doc: &MarriageCertificate, builder: &mut HtmlBuilder) {
    let facts = &doc.facts;
    open_facts(builder);
    registry_rows(&doc.header, builder);
    close_facts(builder);

    builder.open_classed("div", "parties");
    render_party("husband", "Husband", &facts.husband, builder);
    render_party("wife", "Wife", &facts.wife, builder);
    builder.close();

    open_facts(builder);
    builder.fact_row(
        "Date of marriage",
        "date_of_marriage",
        facts.date_of_marriage.as_deref(),
    );
    builder.fact_row(
        "Place of marriage",
        "place_of_marriage",
        facts.place_of_marriage.as_deref(),
    );
    close_facts(builder);
}

/// One party block; `role` is the field-name prefix (`husband`, `wife`)
fn render_party(role: &str, heading: &str, party: &Party, builder: &mut HtmlBuilder) {
    builder.open_classed("section", &format!("party party-{}", role));
    builder.element_classed("h3", "party-heading", heading);
    open_facts(builder);
    let rows = [
        ("Name", "name", &party.name),
        ("Age", "age", &party.age),
        ("Citizenship", "citizenship", &party.citizenship),
        ("Civil status", "civil_status", &party.civil_status),
        ("Name of mother", "mother", &party.mother),
        ("Name of father", "father", &party.father),
    ];
    for (label, field, value) in rows {
        builder.fact_row(label, &format!("{}_{}", role, field), value.as_deref());
    }
    close_facts(builder);
    builder.close();
}

fn render_death(doc: &DeathCertificate, builder: &mut HtmlBuilder) {
    let facts = &doc.facts;
    open_facts(builder);
    registry_rows(&doc.header, builder);
    builder.fact_row("Name of deceased", "deceased_name", facts.deceased_name.as_deref());
    builder.fact_row("Sex", "sex", facts.sex.as_deref());
    builder.fact_row("Age", "age", facts.age.as_deref());
    builder.fact_row("Civil status", "civil_status", facts.civil_status.as_deref());
    builder.fact_row("Citizenship", "citizenship", facts.citizenship.as_deref());
    builder.fact_row("Date of death", "date_of_death", facts.date_of_death.as_deref());
    builder.fact_row("Place of death", "place_of_death", facts.place_of_death.as_deref());
    builder.fact_row("Cause of death", "cause_of_death", facts.cause_of_death.as_deref());
    close_facts(builder);
}

fn render_attestation(attestation: &Attestation, builder: &mut HtmlBuilder) {
    let issuance = format!(
        "This certification is issued to {} upon request.",
        builder.value_span("issued_to", attestation.issued_to.as_deref())
    );
    builder.inline_classed("p", "issuance", &issuance);

    builder.open_classed("footer", "attestation");
    render_signatory(
        "verified",
        "Verified by:",
        ("verified_by", attestation.verified_by.as_deref()),
        ("verified_by_title", attestation.verified_by_title.as_deref()),
        builder,
    );
    render_signatory(
        "approved",
        "Approved by:",
        ("approved_by", attestation.approved_by.as_deref()),
        ("approved_by_title", attestation.approved_by_title.as_deref()),
        builder,
    );

    let receipt = format!(
        "Amount paid: {} O.R. number: {} Date paid: {}",
        builder.value_span("amount_paid", attestation.amount_paid.as_deref()),
        builder.value_span("or_number", attestation.or_number.as_deref()),
        builder.value_span("date_paid", attestation.date_paid.as_deref()),
    );
    builder.inline_classed("p", "receipt", &receipt);
    builder.inline_classed(
        "p",
        "disclaimer",
        &format!("Note: {}", escape_html(DISCLAIMER)),
    );
    builder.close();
}

/// A signature block: caption, name and official title
fn render_signatory(
    role: &str,
    caption: &str,
    name: (&str, Option<&str>),
    title: (&str, Option<&str>),
    builder: &mut HtmlBuilder,
) {
    builder.open_classed("div", &format!("signatory signatory-{}", role));
    builder.element_classed("p", "signatory-caption", caption);
    let name_markup = builder.value_span(name.0, name.1);
    builder.inline_classed("p", "signatory-name", &name_markup);
    let title_markup = builder.value_span(title.0, title.1);
    builder.inline_classed("p", "signatory-title", &title_markup);
    builder.close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::{CertificateRecord, ValidationMode};

    fn fragment() -> HtmlConfig {
        HtmlConfig::default().with_standalone(false)
    }

    fn render(record: &CertificateRecord) -> String {
        let certificate = Certificate::from_record(record, ValidationMode::Lenient)
            .unwrap()
            .unwrap();
        render_modal(Some(&certificate), &fragment(), &Stylesheet::default(), None)
    }

    #[test]
    fn test_shell_without_certificate() {
        let html = render_modal(None, &fragment(), &Stylesheet::default(), None);
        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains(r#"aria-labelledby="crp-preview-title""#));
        assert!(html.contains(r#"<div class="crp-dialog-body"></div>"#));
        assert!(html.contains(r#"data-action="close""#));
        assert!(html.contains(r#"data-action="generate""#));
        assert!(!html.contains("<section"));
        assert!(!html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_standalone_document() {
        let html = render_modal(None, &HtmlConfig::default(), &Stylesheet::default(), None);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains(r#"<meta charset="utf-8">"#));
        assert!(html.contains(r##"<meta name="theme-color" content="#1d4ed8">"##));
        assert!(html.contains("<title>Certificate Preview</title>"));
        assert!(html.contains("--paper: #fffdf5;"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_style_rules_follow_pretty_print() {
        let pretty = render_modal(None, &HtmlConfig::default(), &Stylesheet::default(), None);
        assert!(pretty.contains("<style>\n      :root { --accent-1: "));
        assert!(pretty.contains("\n      .crp-dialog { "));

        let compact = HtmlConfig::default().with_pretty_print(false);
        let html = render_modal(None, &compact, &Stylesheet::default(), None);
        assert!(!html.contains('\n'));
        assert!(html.contains("<style>:root { --accent-1: "));
        assert!(html.contains("}.crp-overlay {"));
    }

    #[test]
    fn test_stylesheet_cannot_close_style_element() {
        let mut stylesheet = Stylesheet::default();
        stylesheet.colors.insert(
            "paper".to_string(),
            "red; } </style><script>alert(1)</script><style>".to_string(),
        );
        let html = render_modal(None, &HtmlConfig::default(), &stylesheet, None);
        assert!(!html.contains("<script>"));
        assert_eq!(html.matches("</style>").count(), 1);
    }

    #[test]
    fn test_birth_statement_names_register() {
        let html = render(
            &CertificateRecord::new("birth")
                .with_field("page_number", 45u64)
                .with_field("book_number", 7u64),
        );
        assert!(html.contains("Certificate of Live Birth"));
        assert!(html.contains("facts of birth appear in our Register of Births on page"));
        assert!(html.contains(r#"data-field="page_number">45</span>"#));
        assert!(html.contains(r#"data-field="book_number">7</span>"#));
    }

    #[test]
    fn test_death_uses_death_register() {
        let html = render(&CertificateRecord::new("death"));
        assert!(html.contains("Register of Deaths"));
        assert!(html.contains(r#"data-certificate-type="death""#));
    }

    #[test]
    fn test_party_fields_are_prefixed_by_role() {
        let html = render(
            &CertificateRecord::new("marriage")
                .with_field("husband_mother", "Catalina")
                .with_field("wife_father", "Nicolas"),
        );
        assert!(html.contains(r#"data-field="husband_mother">Catalina</td>"#));
        assert!(html.contains(r#"data-field="wife_father">Nicolas</td>"#));
        assert!(html.contains(r#"<section class="crp-party crp-party-wife">"#));
    }

    #[test]
    fn test_seal_is_embedded() {
        let seal = SealImage::new("image/svg+xml", b"<svg/>".to_vec());
        let certificate =
            Certificate::from_record(&CertificateRecord::new("marriage"), ValidationMode::Lenient)
                .unwrap()
                .unwrap();
        let html = render_modal(
            Some(&certificate),
            &fragment(),
            &Stylesheet::default(),
            Some(&seal),
        );
        assert!(html.contains(r#"src="data:image/svg+xml;base64,PHN2Zy8+""#));
        assert!(html.contains(r#"alt="Official seal""#));
    }

    #[test]
    fn test_disclaimer_and_receipt_line() {
        let html = render(
            &CertificateRecord::new("death")
                .with_field("amount_paid", "155.00")
                .with_field("or_number", "OR-88121"),
        );
        assert!(html.contains(DISCLAIMER));
        assert!(html.contains(
            r#"Amount paid: <span class="crp-value" data-field="amount_paid">155.00</span> O.R. number: <span class="crp-value" data-field="or_number">OR-88121</span>"#
        ));
    }
}

use mfview_engine::{FieldKnowl, QexpFormat, WebNewform};

use super::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, NewformViewModel, QexpViewModel, StatusBadge,
};

pub fn present_newform<K: FieldKnowl + ?Sized>(
    form: &WebNewform,
    knowls: &K,
    prec_max: usize,
) -> CommandResultViewModel<NewformViewModel> {
    let row = form.row();

    let content = NewformViewModel {
        label: form.label().to_string(),
        title: form.title().to_string(),
        level: form.level(),
        weight: form.weight(),
        dim: form.dim(),
        char_orbit_label: form.char_orbit_label().to_string(),
        char_conrey: form.char_conrey(),
        char_conrey_str: form.char_conrey_str().to_string(),
        char_conrey_link: form.char_conrey_link().to_string(),
        inner_twist: form.inner_twist().to_vec(),
        is_cm: row.is_cm,
        cm_field: form.cm_field_knowl(knowls).ok(),
        field: form.field_display(knowls),
        defining_polynomial: form.defining_polynomial(),
        order_basis: form.order_basis(),
        has_exact_qexp: form.has_exact_qexp(),
        qexp_prec: form.qexp_prec(),
        qexp: form.q_expansion(QexpFormat::Oneline, prec_max),
        dim_grid: *form.dim_grid(),
        properties: form.properties().to_vec(),
        bread: form.bread().to_vec(),
        friends: form.friends().to_vec(),
    };

    let mut result = CommandResultViewModel::new(content);

    if !form.has_exact_qexp() {
        result = result.with_badge(StatusBadge::warning(
            "Only traces are stored; exact coefficients are unavailable",
        ));
    } else if form.qexp_prec() > prec_max {
        result = result.with_suggestion(
            Guidance::new(format!(
                "{} coefficients are stored; the expansion above stops at {}",
                form.qexp_prec(),
                prec_max
            ))
            .with_command(cmd::qexp_all(form.label())),
        );
    }

    result
}

pub fn present_qexp(
    form: &WebNewform,
    format: QexpFormat,
    prec_max: usize,
) -> CommandResultViewModel<QexpViewModel> {
    let content = QexpViewModel {
        label: form.label().to_string(),
        style: format.to_string(),
        prec_max,
        has_exact_qexp: form.has_exact_qexp(),
        qexp: form.q_expansion(format, prec_max),
    };

    let mut result = CommandResultViewModel::new(content);
    if !form.has_exact_qexp() {
        result = result
            .with_badge(StatusBadge::warning("Only the leading term is known"))
            .with_suggestion(
                Guidance::new("See the stored attributes").with_command(cmd::show(form.label())),
            );
    }
    result
}

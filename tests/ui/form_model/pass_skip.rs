use prepform::form::{FieldLens, FormModel};

#[derive(Clone, prepform::form::FormModel)]
struct DraftForm {
    title: String,
    #[form(skip)]
    revision: u32,
}

fn main() {
    let fields = DraftForm::fields();
    let lens = fields.title();
    let model = DraftForm {
        title: "notes".to_string(),
        revision: 3,
    };
    assert_eq!(lens.key().as_str(), "title");
    assert_eq!(lens.get(&model), "notes");
    assert_eq!(model.revision, 3);
}

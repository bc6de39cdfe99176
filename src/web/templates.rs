//! Page templates, embedded in the binary.

use once_cell::sync::Lazy;
use tera::{Context, Tera};

use crate::Result;

/// Global template engine instance with embedded templates.
pub static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();

    tera.add_raw_templates(vec![
        ("base.html", BASE_TEMPLATE),
        ("item/form.html", FORM_TEMPLATE),
        ("item/view.html", VIEW_TEMPLATE),
        ("error.html", ERROR_TEMPLATE),
    ])
    .expect("Failed to load templates");

    tera
});

/// Render a template with context.
pub fn render(template: &str, context: &Context) -> Result<String> {
    Ok(TEMPLATES.render(template, context)?)
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}itembox{% endblock %}</title>
    <style>
        body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; max-width: 560px; margin: 40px auto; }
        li { margin-bottom: 12px; }
        img { display: block; margin-top: 8px; }
    </style>
</head>
<body>
{% block content %}{% endblock %}
</body>
</html>"##;

const FORM_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}Register item{% endblock %}
{% block content %}
<h2>Register item</h2>
<form action="/items/new" method="post" enctype="multipart/form-data">
    <ul>
        <li>Item name <input type="text" name="itemName" required></li>
        <li>Attachment <input type="file" name="attachFile"></li>
        <li>Images <input type="file" multiple="multiple" name="imageFiles"></li>
    </ul>
    <input type="submit" value="Submit">
</form>
{% endblock %}"##;

const VIEW_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}{{ item.item_name }}{% endblock %}
{% block content %}
<h2>Item</h2>
<p>Item id: {{ item.id }}</p>
<p>Item name: {{ item.item_name }}</p>
{% if item.attach_file %}
<p>Attachment: <a href="/attach/{{ item.id }}">{{ item.attach_file.original_name }}</a></p>
{% endif %}
{% for image in item.image_files %}
<img src="/images/{{ image.stored_name | urlencode_strict }}" alt="{{ image.original_name }}" width="300" height="300">
{% endfor %}
<p><a href="/items/new">Register another item</a></p>
{% endblock %}"##;

const ERROR_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}Error {{ status }}{% endblock %}
{% block content %}
<h2>{{ status }}</h2>
<p>{{ message }}</p>
<p><a href="/items/new">Back to the form</a></p>
{% endblock %}"##;

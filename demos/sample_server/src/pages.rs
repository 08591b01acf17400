use quick_xml::escape::escape;
use recognize_client::presentation::ImageInfo;
use serde_json::Value;

fn document(body: &str) -> String {
    format!(
        "<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\" /></head>\
         <body>{body}</body></html>"
    )
}

/// Landing page with the recognition and upload forms
pub fn start_page() -> String {
    document(
        "<form action=\"/recognize\" enctype=\"multipart/form-data\" method=\"post\">\
         <input type=\"file\" name=\"upload\">\
         <label>Multi mode<input type=\"checkbox\" name=\"multi\"></label>\
         <label>Show all results<input type=\"checkbox\" name=\"allResults\"></label>\
         <input type=\"submit\" value=\"Recognize\" />\
         </form><br/>\
         <form action=\"/imageInsert\" enctype=\"multipart/form-data\" method=\"post\">\
         <input type=\"text\" name=\"id\">\
         <input type=\"text\" name=\"name\">\
         <input type=\"file\" name=\"upload\">\
         <input type=\"submit\" value=\"Add image\" />\
         </form>\
         <br/><a href=\"/build\">Build index</a>\
         <br/><a href=\"/list\">Image list</a>",
    )
}

/// Renders a payload for display
pub fn payload(data: &Value) -> String {
    let text = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    format!("<pre>{}</pre>", escape(&text))
}

/// Page shown after an index build was requested
pub fn build_page(data: &Value) -> String {
    format!("{}<a href=\"/status\">Status</a>", payload(data))
}

/// Table of the images in the collection, with thumbnails
pub fn image_table(images: &[ImageInfo]) -> String {
    let mut html = String::from("<table><tr><th>ID</th><th>Name</th><th>Image</th></tr>");
    for image in images {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td><img src=\"{}\"/></td></tr>",
            escape(&image.id),
            escape(&image.name),
            escape(&image.thumbnail(100, 100)),
        ));
    }
    html.push_str("</table>");
    html
}

//! Single-page PDF wrapping the client's bitmap capture of the preview.
//!
//! The page is exactly the bitmap's pixel size and the bitmap is drawn over
//! the whole page, so the output is an image: no selectable text.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::GenericImageView;
use tracing::debug;

use crate::export::{ExportError, ExportFormat, ExportedFile};
use crate::models::cv::CvModel;
use crate::render::Labels;

/// Decoded capture as opaque RGB pixels.
#[derive(Debug, Clone)]
pub struct Capture {
    pub width: u32,
    pub height: u32,
    rgb: Vec<u8>,
}

impl Capture {
    /// Decodes a PNG. Transparent pixels are composited over white, the
    /// capture background.
    pub fn from_png(data: &[u8]) -> Result<Self, ExportError> {
        let img = image::load_from_memory_with_format(data, image::ImageFormat::Png)?;
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyCapture);
        }

        let rgba = img.to_rgba8();
        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            for channel in [r, g, b] {
                rgb.push(over_white(channel, a));
            }
        }

        Ok(Self { width, height, rgb })
    }
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let c = channel as u32;
    let a = alpha as u32;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// PDF text string as UTF-16BE hex, so any title survives.
fn text_string(s: &str) -> String {
    let mut out = String::from("<FEFF");
    for unit in s.encode_utf16() {
        out.push_str(&format!("{unit:04X}"));
    }
    out.push('>');
    out
}

/// Writes the one-page document. Objects: catalog, pages, page, content
/// stream, image XObject, info.
pub fn write_pdf(capture: &Capture, title: &str) -> Result<Vec<u8>, ExportError> {
    let (w, h) = (capture.width, capture.height);
    let content = compress(format!("q\n{w} 0 0 {h} 0 0 cm\n/Im1 Do\nQ\n").as_bytes())?;
    let pixels = compress(&capture.rgb)?;

    let mut output: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::with_capacity(6);

    writeln!(output, "%PDF-1.4")?;
    output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

    let dicts = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {w} {h}] \
             /Resources << /XObject << /Im1 5 0 R >> >> /Contents 4 0 R >>"
        ),
    ];
    for (i, dict) in dicts.iter().enumerate() {
        offsets.push(output.len());
        writeln!(output, "{} 0 obj\n{}\nendobj", i + 1, dict)?;
    }

    offsets.push(output.len());
    writeln!(
        output,
        "4 0 obj\n<< /Length {} /Filter /FlateDecode >>\nstream",
        content.len()
    )?;
    output.extend_from_slice(&content);
    writeln!(output, "\nendstream\nendobj")?;

    offsets.push(output.len());
    writeln!(
        output,
        "5 0 obj\n<< /Type /XObject /Subtype /Image /Width {w} /Height {h} \
         /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /FlateDecode /Length {} >>\nstream",
        pixels.len()
    )?;
    output.extend_from_slice(&pixels);
    writeln!(output, "\nendstream\nendobj")?;

    offsets.push(output.len());
    writeln!(
        output,
        "6 0 obj\n<< /Title {} /Producer (cvstudio) >>\nendobj",
        text_string(title)
    )?;

    let xref_start = output.len();
    writeln!(output, "xref\n0 {}", offsets.len() + 1)?;
    writeln!(output, "0000000000 65535 f ")?;
    for offset in &offsets {
        writeln!(output, "{offset:010} 00000 n ")?;
    }
    writeln!(
        output,
        "trailer\n<< /Size {} /Root 1 0 R /Info 6 0 R >>\nstartxref\n{}",
        offsets.len() + 1,
        xref_start
    )?;
    write!(output, "%%EOF")?;

    debug!("Wrote {w}x{h} capture PDF ({} bytes)", output.len());
    Ok(output)
}

/// No capture means nothing to export; callers treat `None` as a no-op.
pub fn export_pdf(
    capture: Option<&Capture>,
    cv: &CvModel,
    labels: &Labels,
) -> Result<Option<ExportedFile>, ExportError> {
    let Some(capture) = capture else {
        return Ok(None);
    };
    let title = cv.personal_info.full_name.trim();
    let title = if title.is_empty() {
        labels.untitled.as_str()
    } else {
        title
    };
    let bytes = write_pdf(capture, title)?;
    Ok(Some(ExportedFile::new(cv, labels, ExportFormat::Pdf, bytes)))
}

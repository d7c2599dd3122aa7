use std::path::PathBuf;

use softcanvas::{
    BlendMode, BloomOpts, BufferPool, Canvas, CanvasRef, Transform, blit, bloom, fill_rectangle,
    fill_triangle, line, pack, polygon, unpack,
};

const W: i32 = 256;
const H: i32 = 256;

fn checkerboard(canvas: &mut Canvas<'_>, cell: i32) -> anyhow::Result<()> {
    for cy in 0..(canvas.height() + cell - 1) / cell {
        for cx in 0..(canvas.width() + cell - 1) / cell {
            let shade = if (cx + cy) % 2 == 0 { 40 } else { 56 };
            let x1 = ((cx + 1) * cell).min(canvas.width());
            let y1 = ((cy + 1) * cell).min(canvas.height());
            fill_rectangle(
                canvas,
                (cx * cell, cy * cell),
                (x1, y1),
                pack(shade, shade, shade + 8, 255),
            )?;
        }
    }
    Ok(())
}

fn gradient_sprite(size: i32) -> Vec<u32> {
    let mut out = Vec::with_capacity((size * size) as usize);
    for y in 0..size {
        for x in 0..size {
            let r = (x * 255 / (size - 1)) as u32;
            let b = (y * 255 / (size - 1)) as u32;
            out.push(pack(r, 255 - r, b, 220));
        }
    }
    out
}

fn main() {
    tracing_subscriber::fmt::init();
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let pool = BufferPool::new();
    let mut scene = vec![0u32; (W * H) as usize];
    {
        let mut canvas = Canvas::new(&mut scene, W, H)?;
        checkerboard(&mut canvas, 16)?;

        let mut over = canvas.with_blend_mode(BlendMode::AlphaComposite);
        fill_triangle(&mut over, (30, 220), (128, 30), (226, 220), pack(255, 140, 0, 160));
        polygon(
            &mut over,
            &[(30, 220), (128, 30), (226, 220)],
            pack(255, 255, 255, 255),
        )?;

        let sprite_buf = gradient_sprite(48);
        let sprite = CanvasRef::new(&sprite_buf, 48, 48)?;
        let t = Transform::rotate_around(0.6, 24, 24).with_scale(1.5, 1.0);
        blit(&sprite, &mut over, (128, 150), &t)?;

        let mut glow = over.with_blend_mode(BlendMode::Add);
        fill_rectangle(&mut glow, (190, 20), (200, 30), pack(255, 255, 230, 255))?;
        line(&mut glow, (10, 10), (245, 40), pack(120, 200, 255, 255))?;
    }

    let mut out = vec![0u32; scene.len()];
    let opts = BloomOpts::from_json(r#"{"threshold": 0.7, "kernel_size": 15}"#)?;
    bloom(
        &CanvasRef::new(&scene, W, H)?,
        &mut Canvas::new(&mut out, W, H)?,
        &pool,
        &opts,
    )?;
    tracing::info!(stats = ?pool.stats(), "bloom finished");

    let rgba: Vec<u8> = out
        .iter()
        .flat_map(|&p| {
            let (r, g, b, a) = unpack(p);
            [r, g, b, a]
        })
        .collect();

    let out_dir = PathBuf::from("assets");
    std::fs::create_dir_all(&out_dir)?;
    let out_path = out_dir.join("out_scene.png");
    image::save_buffer_with_format(
        &out_path,
        &rgba,
        W as u32,
        H as u32,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}

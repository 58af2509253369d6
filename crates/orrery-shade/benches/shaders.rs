use criterion::{Criterion, black_box, criterion_group, criterion_main};
use orrery_math::vec3;
use orrery_shade::{ShaderInput, ShaderKind, shade};

fn bench_shaders(c: &mut Criterion) {
    let input = ShaderInput::on_unit_sphere(vec3(0.31, -0.42, 0.85), 17.25);
    for kind in ShaderKind::ALL {
        c.bench_function(&format!("shade_{}", kind.name().to_lowercase()), |bencher| {
            bencher.iter(|| black_box(shade(kind, black_box(&input))))
        });
    }
}

fn bench_disc(c: &mut Criterion) {
    // One full 72px-radius disc, the size of the default showcase planet.
    let r = 72i32;
    c.bench_function("shade_disc_r72_earth", |bencher| {
        bencher.iter(|| {
            let mut acc = 0u32;
            for dy in -r..=r {
                for dx in -r..=r {
                    let d2 = dx * dx + dy * dy;
                    if d2 > r * r {
                        continue;
                    }
                    let rf = r as f32;
                    let z = ((r * r - d2) as f32).sqrt() / rf;
                    let input =
                        ShaderInput::on_unit_sphere(vec3(dx as f32 / rf, dy as f32 / rf, z), 4.0);
                    acc = acc.wrapping_add(shade(ShaderKind::Earth, &input).raw() as u32);
                }
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_shaders, bench_disc);
criterion_main!(benches);

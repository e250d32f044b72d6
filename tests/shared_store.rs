use egui::pos2;
use sketchpad::{StrokeStore, SurfaceSize, render};
use std::thread;

#[test]
fn test_input_thread_and_render_thread_share_store() {
    let shared = StrokeStore::new().into_shared();

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 0..20 {
                let mut store = shared.lock();
                let y = i as f32;
                store.begin_stroke(pos2(0.0, y));
                store.extend_stroke(pos2(10.0, y));
                store.extend_stroke(pos2(20.0, y));
            }
        })
    };

    let size = SurfaceSize::new(32, 32).expect("valid size");
    for _ in 0..20 {
        let store = shared.lock();
        let _ = render(store.strokes(), size);
        // Strokes are appended under the lock, so a reader never sees a partial one.
        assert!(store.strokes().iter().all(|s| s.len() == 3));
    }

    writer.join().expect("writer thread panicked");
    assert_eq!(shared.lock().len(), 20);
}

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use ascii_cube::core::{Rasterizer, RenderConfig};
use ascii_cube::term::{encode_frame_into, RAW_LINE_BREAK};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Both scenarios live in one test so the global counter is never shared
// between concurrently running tests.
#[test]
fn frame_render_and_encode_are_allocation_free_after_warmup() {
    let mut r = Rasterizer::new(RenderConfig::default()).unwrap();
    r.render_frame();

    let color_ptr = r.buffers().color().as_ptr();
    let depth_ptr = r.buffers().depth().as_ptr();

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            r.render_frame();
        }
    });
    assert_eq!(allocs, 0);
    assert_eq!(r.buffers().color().as_ptr(), color_ptr);
    assert_eq!(r.buffers().depth().as_ptr(), depth_ptr);

    let mut text = String::new();
    let mut out = Vec::new();
    encode_frame_into(r.buffers(), RAW_LINE_BREAK, &mut text, &mut out).unwrap();

    let allocs = with_alloc_counting(|| {
        for _ in 0..50 {
            r.render_frame();
            out.clear();
            encode_frame_into(r.buffers(), RAW_LINE_BREAK, &mut text, &mut out).unwrap();
        }
    });
    assert_eq!(allocs, 0);
}

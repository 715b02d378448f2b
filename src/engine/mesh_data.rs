// Stand-in mesh asset. The demo was built around the Stanford dragon, whose
// vertex/index data is not distributed with this crate; this generated torus
// takes its place with the same vertex layout (position, normal, uv).
//
// Torus: major radius 7.0, minor radius 2.5, 36 x 18 segments, ring in the XY
// plane. Regenerate rather than hand-edit. Dropping in the dragon data only
// means replacing these two arrays; every count is derived from them.

use super::geometry::{Index, Vertex};

const fn v(p: [f32; 3], n: [f32; 3], uv: [f32; 2]) -> Vertex {
    Vertex { position: p, normal: n, uv }
}

#[rustfmt::skip]
pub static MESH_VERTICES: [Vertex; 703] = [
    v([9.5000, 0.0000, 0.0000], [1.0000, 0.0000, 0.0000], [0.0000, 0.0000]),
    v([9.3492, 0.0000, 0.8551], [0.9397, 0.0000, 0.3420], [0.0000, 0.0556]),
    v([8.9151, 0.0000, 1.6070], [0.7660, 0.0000, 0.6428], [0.0000, 0.1111]),
    v([8.2500, 0.0000, 2.1651], [0.5000, 0.0000, 0.8660], [0.0000, 0.1667]),
    v([7.4341, 0.0000, 2.4620], [0.1736, 0.0000, 0.9848], [0.0000, 0.2222]),
    v([6.5659, 0.0000, 2.4620], [-0.1736, 0.0000, 0.9848], [0.0000, 0.2778]),
    v([5.7500, 0.0000, 2.1651], [-0.5000, 0.0000, 0.8660], [0.0000, 0.3333]),
    v([5.0849, 0.0000, 1.6070], [-0.7660, 0.0000, 0.6428], [0.0000, 0.3889]),
    v([4.6508, 0.0000, 0.8551], [-0.9397, 0.0000, 0.3420], [0.0000, 0.4444]),
    v([4.5000, 0.0000, 0.0000], [-1.0000, 0.0000, 0.0000], [0.0000, 0.5000]),
    v([4.6508, 0.0000, -0.8551], [-0.9397, 0.0000, -0.3420], [0.0000, 0.5556]),
    v([5.0849, 0.0000, -1.6070], [-0.7660, 0.0000, -0.6428], [0.0000, 0.6111]),
    v([5.7500, 0.0000, -2.1651], [-0.5000, 0.0000, -0.8660], [0.0000, 0.6667]),
    v([6.5659, 0.0000, -2.4620], [-0.1736, 0.0000, -0.9848], [0.0000, 0.7222]),
    v([7.4341, 0.0000, -2.4620], [0.1736, 0.0000, -0.9848], [0.0000, 0.7778]),
    v([8.2500, 0.0000, -2.1651], [0.5000, 0.0000, -0.8660], [0.0000, 0.8333]),
    v([8.9151, 0.0000, -1.6070], [0.7660, 0.0000, -0.6428], [0.0000, 0.8889]),
    v([9.3492, 0.0000, -0.8551], [0.9397, 0.0000, -0.3420], [0.0000, 0.9444]),
    v([9.5000, 0.0000, 0.0000], [1.0000, 0.0000, 0.0000], [0.0000, 1.0000]),
    v([9.3557, 1.6497, 0.0000], [0.9848, 0.1736, 0.0000], [0.0278, 0.0000]),
    v([9.2072, 1.6235, 0.8551], [0.9254, 0.1632, 0.3420], [0.0278, 0.0556]),
    v([8.7797, 1.5481, 1.6070], [0.7544, 0.1330, 0.6428], [0.0278, 0.1111]),
    v([8.1247, 1.4326, 2.1651], [0.4924, 0.0868, 0.8660], [0.0278, 0.1667]),
    v([7.3212, 1.2909, 2.4620], [0.1710, 0.0302, 0.9848], [0.0278, 0.2222]),
    v([6.4661, 1.1402, 2.4620], [-0.1710, -0.0302, 0.9848], [0.0278, 0.2778]),
    v([5.6626, 0.9985, 2.1651], [-0.4924, -0.0868, 0.8660], [0.0278, 0.3333]),
    v([5.0076, 0.8830, 1.6070], [-0.7544, -0.1330, 0.6428], [0.0278, 0.3889]),
    v([4.5801, 0.8076, 0.8551], [-0.9254, -0.1632, 0.3420], [0.0278, 0.4444]),
    v([4.4316, 0.7814, 0.0000], [-0.9848, -0.1736, 0.0000], [0.0278, 0.5000]),
    v([4.5801, 0.8076, -0.8551], [-0.9254, -0.1632, -0.3420], [0.0278, 0.5556]),
    v([5.0076, 0.8830, -1.6070], [-0.7544, -0.1330, -0.6428], [0.0278, 0.6111]),
    v([5.6626, 0.9985, -2.1651], [-0.4924, -0.0868, -0.8660], [0.0278, 0.6667]),
    v([6.4661, 1.1402, -2.4620], [-0.1710, -0.0302, -0.9848], [0.0278, 0.7222]),
    v([7.3212, 1.2909, -2.4620], [0.1710, 0.0302, -0.9848], [0.0278, 0.7778]),
    v([8.1247, 1.4326, -2.1651], [0.4924, 0.0868, -0.8660], [0.0278, 0.8333]),
    v([8.7797, 1.5481, -1.6070], [0.7544, 0.1330, -0.6428], [0.0278, 0.8889]),
    v([9.2072, 1.6235, -0.8551], [0.9254, 0.1632, -0.3420], [0.0278, 0.9444]),
    v([9.3557, 1.6497, 0.0000], [0.9848, 0.1736, 0.0000], [0.0278, 1.0000]),
    v([8.9271, 3.2492, 0.0000], [0.9397, 0.3420, 0.0000], [0.0556, 0.0000]),
    v([8.7854, 3.1976, 0.8551], [0.8830, 0.3214, 0.3420], [0.0556, 0.0556]),
    v([8.3775, 3.0491, 1.6070], [0.7198, 0.2620, 0.6428], [0.0556, 0.1111]),
    v([7.7525, 2.8217, 2.1651], [0.4698, 0.1710, 0.8660], [0.0556, 0.1667]),
    v([6.9858, 2.5426, 2.4620], [0.1632, 0.0594, 0.9848], [0.0556, 0.2222]),
    v([6.1699, 2.2457, 2.4620], [-0.1632, -0.0594, 0.9848], [0.0556, 0.2778]),
    v([5.4032, 1.9666, 2.1651], [-0.4698, -0.1710, 0.8660], [0.0556, 0.3333]),
    v([4.7782, 1.7391, 1.6070], [-0.7198, -0.2620, 0.6428], [0.0556, 0.3889]),
    v([4.3703, 1.5907, 0.8551], [-0.8830, -0.3214, 0.3420], [0.0556, 0.4444]),
    v([4.2286, 1.5391, 0.0000], [-0.9397, -0.3420, 0.0000], [0.0556, 0.5000]),
    v([4.3703, 1.5907, -0.8551], [-0.8830, -0.3214, -0.3420], [0.0556, 0.5556]),
    v([4.7782, 1.7391, -1.6070], [-0.7198, -0.2620, -0.6428], [0.0556, 0.6111]),
    v([5.4032, 1.9666, -2.1651], [-0.4698, -0.1710, -0.8660], [0.0556, 0.6667]),
    v([6.1699, 2.2457, -2.4620], [-0.1632, -0.0594, -0.9848], [0.0556, 0.7222]),
    v([6.9858, 2.5426, -2.4620], [0.1632, 0.0594, -0.9848], [0.0556, 0.7778]),
    v([7.7525, 2.8217, -2.1651], [0.4698, 0.1710, -0.8660], [0.0556, 0.8333]),
    v([8.3775, 3.0491, -1.6070], [0.7198, 0.2620, -0.6428], [0.0556, 0.8889]),
    v([8.7854, 3.1976, -0.8551], [0.8830, 0.3214, -0.3420], [0.0556, 0.9444]),
    v([8.9271, 3.2492, 0.0000], [0.9397, 0.3420, 0.0000], [0.0556, 1.0000]),
    v([8.2272, 4.7500, 0.0000], [0.8660, 0.5000, 0.0000], [0.0833, 0.0000]),
    v([8.0967, 4.6746, 0.8551], [0.8138, 0.4698, 0.3420], [0.0833, 0.0556]),
    v([7.7207, 4.4576, 1.6070], [0.6634, 0.3830, 0.6428], [0.0833, 0.1111]),
    v([7.1447, 4.1250, 2.1651], [0.4330, 0.2500, 0.8660], [0.0833, 0.1667]),
    v([6.4381, 3.7171, 2.4620], [0.1504, 0.0868, 0.9848], [0.0833, 0.2222]),
    v([5.6862, 3.2829, 2.4620], [-0.1504, -0.0868, 0.9848], [0.0833, 0.2778]),
    v([4.9796, 2.8750, 2.1651], [-0.4330, -0.2500, 0.8660], [0.0833, 0.3333]),
    v([4.4036, 2.5424, 1.6070], [-0.6634, -0.3830, 0.6428], [0.0833, 0.3889]),
    v([4.0277, 2.3254, 0.8551], [-0.8138, -0.4698, 0.3420], [0.0833, 0.4444]),
    v([3.8971, 2.2500, 0.0000], [-0.8660, -0.5000, 0.0000], [0.0833, 0.5000]),
    v([4.0277, 2.3254, -0.8551], [-0.8138, -0.4698, -0.3420], [0.0833, 0.5556]),
    v([4.4036, 2.5424, -1.6070], [-0.6634, -0.3830, -0.6428], [0.0833, 0.6111]),
    v([4.9796, 2.8750, -2.1651], [-0.4330, -0.2500, -0.8660], [0.0833, 0.6667]),
    v([5.6862, 3.2829, -2.4620], [-0.1504, -0.0868, -0.9848], [0.0833, 0.7222]),
    v([6.4381, 3.7171, -2.4620], [0.1504, 0.0868, -0.9848], [0.0833, 0.7778]),
    v([7.1447, 4.1250, -2.1651], [0.4330, 0.2500, -0.8660], [0.0833, 0.8333]),
    v([7.7207, 4.4576, -1.6070], [0.6634, 0.3830, -0.6428], [0.0833, 0.8889]),
    v([8.0967, 4.6746, -0.8551], [0.8138, 0.4698, -0.3420], [0.0833, 0.9444]),
    v([8.2272, 4.7500, 0.0000], [0.8660, 0.5000, 0.0000], [0.0833, 1.0000]),
    v([7.2774, 6.1065, 0.0000], [0.7660, 0.6428, 0.0000], [0.1111, 0.0000]),
    v([7.1619, 6.0096, 0.8551], [0.7198, 0.6040, 0.3420], [0.1111, 0.0556]),
    v([6.8294, 5.7305, 1.6070], [0.5868, 0.4924, 0.6428], [0.1111, 0.1111]),
    v([6.3199, 5.3030, 2.1651], [0.3830, 0.3214, 0.8660], [0.1111, 0.1667]),
    v([5.6949, 4.7786, 2.4620], [0.1330, 0.1116, 0.9848], [0.1111, 0.2222]),
    v([5.0298, 4.2205, 2.4620], [-0.1330, -0.1116, 0.9848], [0.1111, 0.2778]),
    v([4.4048, 3.6960, 2.1651], [-0.3830, -0.3214, 0.8660], [0.1111, 0.3333]),
    v([3.8953, 3.2685, 1.6070], [-0.5868, -0.4924, 0.6428], [0.1111, 0.3889]),
    v([3.5627, 2.9895, 0.8551], [-0.7198, -0.6040, 0.3420], [0.1111, 0.4444]),
    v([3.4472, 2.8925, 0.0000], [-0.7660, -0.6428, 0.0000], [0.1111, 0.5000]),
    v([3.5627, 2.9895, -0.8551], [-0.7198, -0.6040, -0.3420], [0.1111, 0.5556]),
    v([3.8953, 3.2685, -1.6070], [-0.5868, -0.4924, -0.6428], [0.1111, 0.6111]),
    v([4.4048, 3.6960, -2.1651], [-0.3830, -0.3214, -0.8660], [0.1111, 0.6667]),
    v([5.0298, 4.2205, -2.4620], [-0.1330, -0.1116, -0.9848], [0.1111, 0.7222]),
    v([5.6949, 4.7786, -2.4620], [0.1330, 0.1116, -0.9848], [0.1111, 0.7778]),
    v([6.3199, 5.3030, -2.1651], [0.3830, 0.3214, -0.8660], [0.1111, 0.8333]),
    v([6.8294, 5.7305, -1.6070], [0.5868, 0.4924, -0.6428], [0.1111, 0.8889]),
    v([7.1619, 6.0096, -0.8551], [0.7198, 0.6040, -0.3420], [0.1111, 0.9444]),
    v([7.2774, 6.1065, 0.0000], [0.7660, 0.6428, 0.0000], [0.1111, 1.0000]),
    v([6.1065, 7.2774, 0.0000], [0.6428, 0.7660, 0.0000], [0.1389, 0.0000]),
    v([6.0096, 7.1619, 0.8551], [0.6040, 0.7198, 0.3420], [0.1389, 0.0556]),
    v([5.7305, 6.8294, 1.6070], [0.4924, 0.5868, 0.6428], [0.1389, 0.1111]),
    v([5.3030, 6.3199, 2.1651], [0.3214, 0.3830, 0.8660], [0.1389, 0.1667]),
    v([4.7786, 5.6949, 2.4620], [0.1116, 0.1330, 0.9848], [0.1389, 0.2222]),
    v([4.2205, 5.0298, 2.4620], [-0.1116, -0.1330, 0.9848], [0.1389, 0.2778]),
    v([3.6960, 4.4048, 2.1651], [-0.3214, -0.3830, 0.8660], [0.1389, 0.3333]),
    v([3.2685, 3.8953, 1.6070], [-0.4924, -0.5868, 0.6428], [0.1389, 0.3889]),
    v([2.9895, 3.5627, 0.8551], [-0.6040, -0.7198, 0.3420], [0.1389, 0.4444]),
    v([2.8925, 3.4472, 0.0000], [-0.6428, -0.7660, 0.0000], [0.1389, 0.5000]),
    v([2.9895, 3.5627, -0.8551], [-0.6040, -0.7198, -0.3420], [0.1389, 0.5556]),
    v([3.2685, 3.8953, -1.6070], [-0.4924, -0.5868, -0.6428], [0.1389, 0.6111]),
    v([3.6960, 4.4048, -2.1651], [-0.3214, -0.3830, -0.8660], [0.1389, 0.6667]),
    v([4.2205, 5.0298, -2.4620], [-0.1116, -0.1330, -0.9848], [0.1389, 0.7222]),
    v([4.7786, 5.6949, -2.4620], [0.1116, 0.1330, -0.9848], [0.1389, 0.7778]),
    v([5.3030, 6.3199, -2.1651], [0.3214, 0.3830, -0.8660], [0.1389, 0.8333]),
    v([5.7305, 6.8294, -1.6070], [0.4924, 0.5868, -0.6428], [0.1389, 0.8889]),
    v([6.0096, 7.1619, -0.8551], [0.6040, 0.7198, -0.3420], [0.1389, 0.9444]),
    v([6.1065, 7.2774, 0.0000], [0.6428, 0.7660, 0.0000], [0.1389, 1.0000]),
    v([4.7500, 8.2272, 0.0000], [0.5000, 0.8660, 0.0000], [0.1667, 0.0000]),
    v([4.6746, 8.0967, 0.8551], [0.4698, 0.8138, 0.3420], [0.1667, 0.0556]),
    v([4.4576, 7.7207, 1.6070], [0.3830, 0.6634, 0.6428], [0.1667, 0.1111]),
    v([4.1250, 7.1447, 2.1651], [0.2500, 0.4330, 0.8660], [0.1667, 0.1667]),
    v([3.7171, 6.4381, 2.4620], [0.0868, 0.1504, 0.9848], [0.1667, 0.2222]),
    v([3.2829, 5.6862, 2.4620], [-0.0868, -0.1504, 0.9848], [0.1667, 0.2778]),
    v([2.8750, 4.9796, 2.1651], [-0.2500, -0.4330, 0.8660], [0.1667, 0.3333]),
    v([2.5424, 4.4036, 1.6070], [-0.3830, -0.6634, 0.6428], [0.1667, 0.3889]),
    v([2.3254, 4.0277, 0.8551], [-0.4698, -0.8138, 0.3420], [0.1667, 0.4444]),
    v([2.2500, 3.8971, 0.0000], [-0.5000, -0.8660, 0.0000], [0.1667, 0.5000]),
    v([2.3254, 4.0277, -0.8551], [-0.4698, -0.8138, -0.3420], [0.1667, 0.5556]),
    v([2.5424, 4.4036, -1.6070], [-0.3830, -0.6634, -0.6428], [0.1667, 0.6111]),
    v([2.8750, 4.9796, -2.1651], [-0.2500, -0.4330, -0.8660], [0.1667, 0.6667]),
    v([3.2829, 5.6862, -2.4620], [-0.0868, -0.1504, -0.9848], [0.1667, 0.7222]),
    v([3.7171, 6.4381, -2.4620], [0.0868, 0.1504, -0.9848], [0.1667, 0.7778]),
    v([4.1250, 7.1447, -2.1651], [0.2500, 0.4330, -0.8660], [0.1667, 0.8333]),
    v([4.4576, 7.7207, -1.6070], [0.3830, 0.6634, -0.6428], [0.1667, 0.8889]),
    v([4.6746, 8.0967, -0.8551], [0.4698, 0.8138, -0.3420], [0.1667, 0.9444]),
    v([4.7500, 8.2272, 0.0000], [0.5000, 0.8660, 0.0000], [0.1667, 1.0000]),
    v([3.2492, 8.9271, 0.0000], [0.3420, 0.9397, 0.0000], [0.1944, 0.0000]),
    v([3.1976, 8.7854, 0.8551], [0.3214, 0.8830, 0.3420], [0.1944, 0.0556]),
    v([3.0491, 8.3775, 1.6070], [0.2620, 0.7198, 0.6428], [0.1944, 0.1111]),
    v([2.8217, 7.7525, 2.1651], [0.1710, 0.4698, 0.8660], [0.1944, 0.1667]),
    v([2.5426, 6.9858, 2.4620], [0.0594, 0.1632, 0.9848], [0.1944, 0.2222]),
    v([2.2457, 6.1699, 2.4620], [-0.0594, -0.1632, 0.9848], [0.1944, 0.2778]),
    v([1.9666, 5.4032, 2.1651], [-0.1710, -0.4698, 0.8660], [0.1944, 0.3333]),
    v([1.7391, 4.7782, 1.6070], [-0.2620, -0.7198, 0.6428], [0.1944, 0.3889]),
    v([1.5907, 4.3703, 0.8551], [-0.3214, -0.8830, 0.3420], [0.1944, 0.4444]),
    v([1.5391, 4.2286, 0.0000], [-0.3420, -0.9397, 0.0000], [0.1944, 0.5000]),
    v([1.5907, 4.3703, -0.8551], [-0.3214, -0.8830, -0.3420], [0.1944, 0.5556]),
    v([1.7391, 4.7782, -1.6070], [-0.2620, -0.7198, -0.6428], [0.1944, 0.6111]),
    v([1.9666, 5.4032, -2.1651], [-0.1710, -0.4698, -0.8660], [0.1944, 0.6667]),
    v([2.2457, 6.1699, -2.4620], [-0.0594, -0.1632, -0.9848], [0.1944, 0.7222]),
    v([2.5426, 6.9858, -2.4620], [0.0594, 0.1632, -0.9848], [0.1944, 0.7778]),
    v([2.8217, 7.7525, -2.1651], [0.1710, 0.4698, -0.8660], [0.1944, 0.8333]),
    v([3.0491, 8.3775, -1.6070], [0.2620, 0.7198, -0.6428], [0.1944, 0.8889]),
    v([3.1976, 8.7854, -0.8551], [0.3214, 0.8830, -0.3420], [0.1944, 0.9444]),
    v([3.2492, 8.9271, 0.0000], [0.3420, 0.9397, 0.0000], [0.1944, 1.0000]),
    v([1.6497, 9.3557, 0.0000], [0.1736, 0.9848, 0.0000], [0.2222, 0.0000]),
    v([1.6235, 9.2072, 0.8551], [0.1632, 0.9254, 0.3420], [0.2222, 0.0556]),
    v([1.5481, 8.7797, 1.6070], [0.1330, 0.7544, 0.6428], [0.2222, 0.1111]),
    v([1.4326, 8.1247, 2.1651], [0.0868, 0.4924, 0.8660], [0.2222, 0.1667]),
    v([1.2909, 7.3212, 2.4620], [0.0302, 0.1710, 0.9848], [0.2222, 0.2222]),
    v([1.1402, 6.4661, 2.4620], [-0.0302, -0.1710, 0.9848], [0.2222, 0.2778]),
    v([0.9985, 5.6626, 2.1651], [-0.0868, -0.4924, 0.8660], [0.2222, 0.3333]),
    v([0.8830, 5.0076, 1.6070], [-0.1330, -0.7544, 0.6428], [0.2222, 0.3889]),
    v([0.8076, 4.5801, 0.8551], [-0.1632, -0.9254, 0.3420], [0.2222, 0.4444]),
    v([0.7814, 4.4316, 0.0000], [-0.1736, -0.9848, 0.0000], [0.2222, 0.5000]),
    v([0.8076, 4.5801, -0.8551], [-0.1632, -0.9254, -0.3420], [0.2222, 0.5556]),
    v([0.8830, 5.0076, -1.6070], [-0.1330, -0.7544, -0.6428], [0.2222, 0.6111]),
    v([0.9985, 5.6626, -2.1651], [-0.0868, -0.4924, -0.8660], [0.2222, 0.6667]),
    v([1.1402, 6.4661, -2.4620], [-0.0302, -0.1710, -0.9848], [0.2222, 0.7222]),
    v([1.2909, 7.3212, -2.4620], [0.0302, 0.1710, -0.9848], [0.2222, 0.7778]),
    v([1.4326, 8.1247, -2.1651], [0.0868, 0.4924, -0.8660], [0.2222, 0.8333]),
    v([1.5481, 8.7797, -1.6070], [0.1330, 0.7544, -0.6428], [0.2222, 0.8889]),
    v([1.6235, 9.2072, -0.8551], [0.1632, 0.9254, -0.3420], [0.2222, 0.9444]),
    v([1.6497, 9.3557, 0.0000], [0.1736, 0.9848, 0.0000], [0.2222, 1.0000]),
    v([0.0000, 9.5000, 0.0000], [0.0000, 1.0000, 0.0000], [0.2500, 0.0000]),
    v([0.0000, 9.3492, 0.8551], [0.0000, 0.9397, 0.3420], [0.2500, 0.0556]),
    v([0.0000, 8.9151, 1.6070], [0.0000, 0.7660, 0.6428], [0.2500, 0.1111]),
    v([0.0000, 8.2500, 2.1651], [0.0000, 0.5000, 0.8660], [0.2500, 0.1667]),
    v([0.0000, 7.4341, 2.4620], [0.0000, 0.1736, 0.9848], [0.2500, 0.2222]),
    v([0.0000, 6.5659, 2.4620], [0.0000, -0.1736, 0.9848], [0.2500, 0.2778]),
    v([0.0000, 5.7500, 2.1651], [0.0000, -0.5000, 0.8660], [0.2500, 0.3333]),
    v([0.0000, 5.0849, 1.6070], [0.0000, -0.7660, 0.6428], [0.2500, 0.3889]),
    v([0.0000, 4.6508, 0.8551], [0.0000, -0.9397, 0.3420], [0.2500, 0.4444]),
    v([0.0000, 4.5000, 0.0000], [0.0000, -1.0000, 0.0000], [0.2500, 0.5000]),
    v([0.0000, 4.6508, -0.8551], [0.0000, -0.9397, -0.3420], [0.2500, 0.5556]),
    v([0.0000, 5.0849, -1.6070], [0.0000, -0.7660, -0.6428], [0.2500, 0.6111]),
    v([0.0000, 5.7500, -2.1651], [0.0000, -0.5000, -0.8660], [0.2500, 0.6667]),
    v([0.0000, 6.5659, -2.4620], [0.0000, -0.1736, -0.9848], [0.2500, 0.7222]),
    v([0.0000, 7.4341, -2.4620], [0.0000, 0.1736, -0.9848], [0.2500, 0.7778]),
    v([0.0000, 8.2500, -2.1651], [0.0000, 0.5000, -0.8660], [0.2500, 0.8333]),
    v([0.0000, 8.9151, -1.6070], [0.0000, 0.7660, -0.6428], [0.2500, 0.8889]),
    v([0.0000, 9.3492, -0.8551], [0.0000, 0.9397, -0.3420], [0.2500, 0.9444]),
    v([0.0000, 9.5000, 0.0000], [0.0000, 1.0000, 0.0000], [0.2500, 1.0000]),
    v([-1.6497, 9.3557, 0.0000], [-0.1736, 0.9848, 0.0000], [0.2778, 0.0000]),
    v([-1.6235, 9.2072, 0.8551], [-0.1632, 0.9254, 0.3420], [0.2778, 0.0556]),
    v([-1.5481, 8.7797, 1.6070], [-0.1330, 0.7544, 0.6428], [0.2778, 0.1111]),
    v([-1.4326, 8.1247, 2.1651], [-0.0868, 0.4924, 0.8660], [0.2778, 0.1667]),
    v([-1.2909, 7.3212, 2.4620], [-0.0302, 0.1710, 0.9848], [0.2778, 0.2222]),
    v([-1.1402, 6.4661, 2.4620], [0.0302, -0.1710, 0.9848], [0.2778, 0.2778]),
    v([-0.9985, 5.6626, 2.1651], [0.0868, -0.4924, 0.8660], [0.2778, 0.3333]),
    v([-0.8830, 5.0076, 1.6070], [0.1330, -0.7544, 0.6428], [0.2778, 0.3889]),
    v([-0.8076, 4.5801, 0.8551], [0.1632, -0.9254, 0.3420], [0.2778, 0.4444]),
    v([-0.7814, 4.4316, 0.0000], [0.1736, -0.9848, 0.0000], [0.2778, 0.5000]),
    v([-0.8076, 4.5801, -0.8551], [0.1632, -0.9254, -0.3420], [0.2778, 0.5556]),
    v([-0.8830, 5.0076, -1.6070], [0.1330, -0.7544, -0.6428], [0.2778, 0.6111]),
    v([-0.9985, 5.6626, -2.1651], [0.0868, -0.4924, -0.8660], [0.2778, 0.6667]),
    v([-1.1402, 6.4661, -2.4620], [0.0302, -0.1710, -0.9848], [0.2778, 0.7222]),
    v([-1.2909, 7.3212, -2.4620], [-0.0302, 0.1710, -0.9848], [0.2778, 0.7778]),
    v([-1.4326, 8.1247, -2.1651], [-0.0868, 0.4924, -0.8660], [0.2778, 0.8333]),
    v([-1.5481, 8.7797, -1.6070], [-0.1330, 0.7544, -0.6428], [0.2778, 0.8889]),
    v([-1.6235, 9.2072, -0.8551], [-0.1632, 0.9254, -0.3420], [0.2778, 0.9444]),
    v([-1.6497, 9.3557, 0.0000], [-0.1736, 0.9848, 0.0000], [0.2778, 1.0000]),
    v([-3.2492, 8.9271, 0.0000], [-0.3420, 0.9397, 0.0000], [0.3056, 0.0000]),
    v([-3.1976, 8.7854, 0.8551], [-0.3214, 0.8830, 0.3420], [0.3056, 0.0556]),
    v([-3.0491, 8.3775, 1.6070], [-0.2620, 0.7198, 0.6428], [0.3056, 0.1111]),
    v([-2.8217, 7.7525, 2.1651], [-0.1710, 0.4698, 0.8660], [0.3056, 0.1667]),
    v([-2.5426, 6.9858, 2.4620], [-0.0594, 0.1632, 0.9848], [0.3056, 0.2222]),
    v([-2.2457, 6.1699, 2.4620], [0.0594, -0.1632, 0.9848], [0.3056, 0.2778]),
    v([-1.9666, 5.4032, 2.1651], [0.1710, -0.4698, 0.8660], [0.3056, 0.3333]),
    v([-1.7391, 4.7782, 1.6070], [0.2620, -0.7198, 0.6428], [0.3056, 0.3889]),
    v([-1.5907, 4.3703, 0.8551], [0.3214, -0.8830, 0.3420], [0.3056, 0.4444]),
    v([-1.5391, 4.2286, 0.0000], [0.3420, -0.9397, 0.0000], [0.3056, 0.5000]),
    v([-1.5907, 4.3703, -0.8551], [0.3214, -0.8830, -0.3420], [0.3056, 0.5556]),
    v([-1.7391, 4.7782, -1.6070], [0.2620, -0.7198, -0.6428], [0.3056, 0.6111]),
    v([-1.9666, 5.4032, -2.1651], [0.1710, -0.4698, -0.8660], [0.3056, 0.6667]),
    v([-2.2457, 6.1699, -2.4620], [0.0594, -0.1632, -0.9848], [0.3056, 0.7222]),
    v([-2.5426, 6.9858, -2.4620], [-0.0594, 0.1632, -0.9848], [0.3056, 0.7778]),
    v([-2.8217, 7.7525, -2.1651], [-0.1710, 0.4698, -0.8660], [0.3056, 0.8333]),
    v([-3.0491, 8.3775, -1.6070], [-0.2620, 0.7198, -0.6428], [0.3056, 0.8889]),
    v([-3.1976, 8.7854, -0.8551], [-0.3214, 0.8830, -0.3420], [0.3056, 0.9444]),
    v([-3.2492, 8.9271, 0.0000], [-0.3420, 0.9397, 0.0000], [0.3056, 1.0000]),
    v([-4.7500, 8.2272, 0.0000], [-0.5000, 0.8660, 0.0000], [0.3333, 0.0000]),
    v([-4.6746, 8.0967, 0.8551], [-0.4698, 0.8138, 0.3420], [0.3333, 0.0556]),
    v([-4.4576, 7.7207, 1.6070], [-0.3830, 0.6634, 0.6428], [0.3333, 0.1111]),
    v([-4.1250, 7.1447, 2.1651], [-0.2500, 0.4330, 0.8660], [0.3333, 0.1667]),
    v([-3.7171, 6.4381, 2.4620], [-0.0868, 0.1504, 0.9848], [0.3333, 0.2222]),
    v([-3.2829, 5.6862, 2.4620], [0.0868, -0.1504, 0.9848], [0.3333, 0.2778]),
    v([-2.8750, 4.9796, 2.1651], [0.2500, -0.4330, 0.8660], [0.3333, 0.3333]),
    v([-2.5424, 4.4036, 1.6070], [0.3830, -0.6634, 0.6428], [0.3333, 0.3889]),
    v([-2.3254, 4.0277, 0.8551], [0.4698, -0.8138, 0.3420], [0.3333, 0.4444]),
    v([-2.2500, 3.8971, 0.0000], [0.5000, -0.8660, 0.0000], [0.3333, 0.5000]),
    v([-2.3254, 4.0277, -0.8551], [0.4698, -0.8138, -0.3420], [0.3333, 0.5556]),
    v([-2.5424, 4.4036, -1.6070], [0.3830, -0.6634, -0.6428], [0.3333, 0.6111]),
    v([-2.8750, 4.9796, -2.1651], [0.2500, -0.4330, -0.8660], [0.3333, 0.6667]),
    v([-3.2829, 5.6862, -2.4620], [0.0868, -0.1504, -0.9848], [0.3333, 0.7222]),
    v([-3.7171, 6.4381, -2.4620], [-0.0868, 0.1504, -0.9848], [0.3333, 0.7778]),
    v([-4.1250, 7.1447, -2.1651], [-0.2500, 0.4330, -0.8660], [0.3333, 0.8333]),
    v([-4.4576, 7.7207, -1.6070], [-0.3830, 0.6634, -0.6428], [0.3333, 0.8889]),
    v([-4.6746, 8.0967, -0.8551], [-0.4698, 0.8138, -0.3420], [0.3333, 0.9444]),
    v([-4.7500, 8.2272, 0.0000], [-0.5000, 0.8660, 0.0000], [0.3333, 1.0000]),
    v([-6.1065, 7.2774, 0.0000], [-0.6428, 0.7660, 0.0000], [0.3611, 0.0000]),
    v([-6.0096, 7.1619, 0.8551], [-0.6040, 0.7198, 0.3420], [0.3611, 0.0556]),
    v([-5.7305, 6.8294, 1.6070], [-0.4924, 0.5868, 0.6428], [0.3611, 0.1111]),
    v([-5.3030, 6.3199, 2.1651], [-0.3214, 0.3830, 0.8660], [0.3611, 0.1667]),
    v([-4.7786, 5.6949, 2.4620], [-0.1116, 0.1330, 0.9848], [0.3611, 0.2222]),
    v([-4.2205, 5.0298, 2.4620], [0.1116, -0.1330, 0.9848], [0.3611, 0.2778]),
    v([-3.6960, 4.4048, 2.1651], [0.3214, -0.3830, 0.8660], [0.3611, 0.3333]),
    v([-3.2685, 3.8953, 1.6070], [0.4924, -0.5868, 0.6428], [0.3611, 0.3889]),
    v([-2.9895, 3.5627, 0.8551], [0.6040, -0.7198, 0.3420], [0.3611, 0.4444]),
    v([-2.8925, 3.4472, 0.0000], [0.6428, -0.7660, 0.0000], [0.3611, 0.5000]),
    v([-2.9895, 3.5627, -0.8551], [0.6040, -0.7198, -0.3420], [0.3611, 0.5556]),
    v([-3.2685, 3.8953, -1.6070], [0.4924, -0.5868, -0.6428], [0.3611, 0.6111]),
    v([-3.6960, 4.4048, -2.1651], [0.3214, -0.3830, -0.8660], [0.3611, 0.6667]),
    v([-4.2205, 5.0298, -2.4620], [0.1116, -0.1330, -0.9848], [0.3611, 0.7222]),
    v([-4.7786, 5.6949, -2.4620], [-0.1116, 0.1330, -0.9848], [0.3611, 0.7778]),
    v([-5.3030, 6.3199, -2.1651], [-0.3214, 0.3830, -0.8660], [0.3611, 0.8333]),
    v([-5.7305, 6.8294, -1.6070], [-0.4924, 0.5868, -0.6428], [0.3611, 0.8889]),
    v([-6.0096, 7.1619, -0.8551], [-0.6040, 0.7198, -0.3420], [0.3611, 0.9444]),
    v([-6.1065, 7.2774, 0.0000], [-0.6428, 0.7660, 0.0000], [0.3611, 1.0000]),
    v([-7.2774, 6.1065, 0.0000], [-0.7660, 0.6428, 0.0000], [0.3889, 0.0000]),
    v([-7.1619, 6.0096, 0.8551], [-0.7198, 0.6040, 0.3420], [0.3889, 0.0556]),
    v([-6.8294, 5.7305, 1.6070], [-0.5868, 0.4924, 0.6428], [0.3889, 0.1111]),
    v([-6.3199, 5.3030, 2.1651], [-0.3830, 0.3214, 0.8660], [0.3889, 0.1667]),
    v([-5.6949, 4.7786, 2.4620], [-0.1330, 0.1116, 0.9848], [0.3889, 0.2222]),
    v([-5.0298, 4.2205, 2.4620], [0.1330, -0.1116, 0.9848], [0.3889, 0.2778]),
    v([-4.4048, 3.6960, 2.1651], [0.3830, -0.3214, 0.8660], [0.3889, 0.3333]),
    v([-3.8953, 3.2685, 1.6070], [0.5868, -0.4924, 0.6428], [0.3889, 0.3889]),
    v([-3.5627, 2.9895, 0.8551], [0.7198, -0.6040, 0.3420], [0.3889, 0.4444]),
    v([-3.4472, 2.8925, 0.0000], [0.7660, -0.6428, 0.0000], [0.3889, 0.5000]),
    v([-3.5627, 2.9895, -0.8551], [0.7198, -0.6040, -0.3420], [0.3889, 0.5556]),
    v([-3.8953, 3.2685, -1.6070], [0.5868, -0.4924, -0.6428], [0.3889, 0.6111]),
    v([-4.4048, 3.6960, -2.1651], [0.3830, -0.3214, -0.8660], [0.3889, 0.6667]),
    v([-5.0298, 4.2205, -2.4620], [0.1330, -0.1116, -0.9848], [0.3889, 0.7222]),
    v([-5.6949, 4.7786, -2.4620], [-0.1330, 0.1116, -0.9848], [0.3889, 0.7778]),
    v([-6.3199, 5.3030, -2.1651], [-0.3830, 0.3214, -0.8660], [0.3889, 0.8333]),
    v([-6.8294, 5.7305, -1.6070], [-0.5868, 0.4924, -0.6428], [0.3889, 0.8889]),
    v([-7.1619, 6.0096, -0.8551], [-0.7198, 0.6040, -0.3420], [0.3889, 0.9444]),
    v([-7.2774, 6.1065, 0.0000], [-0.7660, 0.6428, 0.0000], [0.3889, 1.0000]),
    v([-8.2272, 4.7500, 0.0000], [-0.8660, 0.5000, 0.0000], [0.4167, 0.0000]),
    v([-8.0967, 4.6746, 0.8551], [-0.8138, 0.4698, 0.3420], [0.4167, 0.0556]),
    v([-7.7207, 4.4576, 1.6070], [-0.6634, 0.3830, 0.6428], [0.4167, 0.1111]),
    v([-7.1447, 4.1250, 2.1651], [-0.4330, 0.2500, 0.8660], [0.4167, 0.1667]),
    v([-6.4381, 3.7171, 2.4620], [-0.1504, 0.0868, 0.9848], [0.4167, 0.2222]),
    v([-5.6862, 3.2829, 2.4620], [0.1504, -0.0868, 0.9848], [0.4167, 0.2778]),
    v([-4.9796, 2.8750, 2.1651], [0.4330, -0.2500, 0.8660], [0.4167, 0.3333]),
    v([-4.4036, 2.5424, 1.6070], [0.6634, -0.3830, 0.6428], [0.4167, 0.3889]),
    v([-4.0277, 2.3254, 0.8551], [0.8138, -0.4698, 0.3420], [0.4167, 0.4444]),
    v([-3.8971, 2.2500, 0.0000], [0.8660, -0.5000, 0.0000], [0.4167, 0.5000]),
    v([-4.0277, 2.3254, -0.8551], [0.8138, -0.4698, -0.3420], [0.4167, 0.5556]),
    v([-4.4036, 2.5424, -1.6070], [0.6634, -0.3830, -0.6428], [0.4167, 0.6111]),
    v([-4.9796, 2.8750, -2.1651], [0.4330, -0.2500, -0.8660], [0.4167, 0.6667]),
    v([-5.6862, 3.2829, -2.4620], [0.1504, -0.0868, -0.9848], [0.4167, 0.7222]),
    v([-6.4381, 3.7171, -2.4620], [-0.1504, 0.0868, -0.9848], [0.4167, 0.7778]),
    v([-7.1447, 4.1250, -2.1651], [-0.4330, 0.2500, -0.8660], [0.4167, 0.8333]),
    v([-7.7207, 4.4576, -1.6070], [-0.6634, 0.3830, -0.6428], [0.4167, 0.8889]),
    v([-8.0967, 4.6746, -0.8551], [-0.8138, 0.4698, -0.3420], [0.4167, 0.9444]),
    v([-8.2272, 4.7500, 0.0000], [-0.8660, 0.5000, 0.0000], [0.4167, 1.0000]),
    v([-8.9271, 3.2492, 0.0000], [-0.9397, 0.3420, 0.0000], [0.4444, 0.0000]),
    v([-8.7854, 3.1976, 0.8551], [-0.8830, 0.3214, 0.3420], [0.4444, 0.0556]),
    v([-8.3775, 3.0491, 1.6070], [-0.7198, 0.2620, 0.6428], [0.4444, 0.1111]),
    v([-7.7525, 2.8217, 2.1651], [-0.4698, 0.1710, 0.8660], [0.4444, 0.1667]),
    v([-6.9858, 2.5426, 2.4620], [-0.1632, 0.0594, 0.9848], [0.4444, 0.2222]),
    v([-6.1699, 2.2457, 2.4620], [0.1632, -0.0594, 0.9848], [0.4444, 0.2778]),
    v([-5.4032, 1.9666, 2.1651], [0.4698, -0.1710, 0.8660], [0.4444, 0.3333]),
    v([-4.7782, 1.7391, 1.6070], [0.7198, -0.2620, 0.6428], [0.4444, 0.3889]),
    v([-4.3703, 1.5907, 0.8551], [0.8830, -0.3214, 0.3420], [0.4444, 0.4444]),
    v([-4.2286, 1.5391, 0.0000], [0.9397, -0.3420, 0.0000], [0.4444, 0.5000]),
    v([-4.3703, 1.5907, -0.8551], [0.8830, -0.3214, -0.3420], [0.4444, 0.5556]),
    v([-4.7782, 1.7391, -1.6070], [0.7198, -0.2620, -0.6428], [0.4444, 0.6111]),
    v([-5.4032, 1.9666, -2.1651], [0.4698, -0.1710, -0.8660], [0.4444, 0.6667]),
    v([-6.1699, 2.2457, -2.4620], [0.1632, -0.0594, -0.9848], [0.4444, 0.7222]),
    v([-6.9858, 2.5426, -2.4620], [-0.1632, 0.0594, -0.9848], [0.4444, 0.7778]),
    v([-7.7525, 2.8217, -2.1651], [-0.4698, 0.1710, -0.8660], [0.4444, 0.8333]),
    v([-8.3775, 3.0491, -1.6070], [-0.7198, 0.2620, -0.6428], [0.4444, 0.8889]),
    v([-8.7854, 3.1976, -0.8551], [-0.8830, 0.3214, -0.3420], [0.4444, 0.9444]),
    v([-8.9271, 3.2492, 0.0000], [-0.9397, 0.3420, 0.0000], [0.4444, 1.0000]),
    v([-9.3557, 1.6497, 0.0000], [-0.9848, 0.1736, 0.0000], [0.4722, 0.0000]),
    v([-9.2072, 1.6235, 0.8551], [-0.9254, 0.1632, 0.3420], [0.4722, 0.0556]),
    v([-8.7797, 1.5481, 1.6070], [-0.7544, 0.1330, 0.6428], [0.4722, 0.1111]),
    v([-8.1247, 1.4326, 2.1651], [-0.4924, 0.0868, 0.8660], [0.4722, 0.1667]),
    v([-7.3212, 1.2909, 2.4620], [-0.1710, 0.0302, 0.9848], [0.4722, 0.2222]),
    v([-6.4661, 1.1402, 2.4620], [0.1710, -0.0302, 0.9848], [0.4722, 0.2778]),
    v([-5.6626, 0.9985, 2.1651], [0.4924, -0.0868, 0.8660], [0.4722, 0.3333]),
    v([-5.0076, 0.8830, 1.6070], [0.7544, -0.1330, 0.6428], [0.4722, 0.3889]),
    v([-4.5801, 0.8076, 0.8551], [0.9254, -0.1632, 0.3420], [0.4722, 0.4444]),
    v([-4.4316, 0.7814, 0.0000], [0.9848, -0.1736, 0.0000], [0.4722, 0.5000]),
    v([-4.5801, 0.8076, -0.8551], [0.9254, -0.1632, -0.3420], [0.4722, 0.5556]),
    v([-5.0076, 0.8830, -1.6070], [0.7544, -0.1330, -0.6428], [0.4722, 0.6111]),
    v([-5.6626, 0.9985, -2.1651], [0.4924, -0.0868, -0.8660], [0.4722, 0.6667]),
    v([-6.4661, 1.1402, -2.4620], [0.1710, -0.0302, -0.9848], [0.4722, 0.7222]),
    v([-7.3212, 1.2909, -2.4620], [-0.1710, 0.0302, -0.9848], [0.4722, 0.7778]),
    v([-8.1247, 1.4326, -2.1651], [-0.4924, 0.0868, -0.8660], [0.4722, 0.8333]),
    v([-8.7797, 1.5481, -1.6070], [-0.7544, 0.1330, -0.6428], [0.4722, 0.8889]),
    v([-9.2072, 1.6235, -0.8551], [-0.9254, 0.1632, -0.3420], [0.4722, 0.9444]),
    v([-9.3557, 1.6497, 0.0000], [-0.9848, 0.1736, 0.0000], [0.4722, 1.0000]),
    v([-9.5000, 0.0000, 0.0000], [-1.0000, 0.0000, 0.0000], [0.5000, 0.0000]),
    v([-9.3492, 0.0000, 0.8551], [-0.9397, 0.0000, 0.3420], [0.5000, 0.0556]),
    v([-8.9151, 0.0000, 1.6070], [-0.7660, 0.0000, 0.6428], [0.5000, 0.1111]),
    v([-8.2500, 0.0000, 2.1651], [-0.5000, 0.0000, 0.8660], [0.5000, 0.1667]),
    v([-7.4341, 0.0000, 2.4620], [-0.1736, 0.0000, 0.9848], [0.5000, 0.2222]),
    v([-6.5659, 0.0000, 2.4620], [0.1736, 0.0000, 0.9848], [0.5000, 0.2778]),
    v([-5.7500, 0.0000, 2.1651], [0.5000, 0.0000, 0.8660], [0.5000, 0.3333]),
    v([-5.0849, 0.0000, 1.6070], [0.7660, 0.0000, 0.6428], [0.5000, 0.3889]),
    v([-4.6508, 0.0000, 0.8551], [0.9397, 0.0000, 0.3420], [0.5000, 0.4444]),
    v([-4.5000, 0.0000, 0.0000], [1.0000, 0.0000, 0.0000], [0.5000, 0.5000]),
    v([-4.6508, 0.0000, -0.8551], [0.9397, 0.0000, -0.3420], [0.5000, 0.5556]),
    v([-5.0849, 0.0000, -1.6070], [0.7660, 0.0000, -0.6428], [0.5000, 0.6111]),
    v([-5.7500, 0.0000, -2.1651], [0.5000, 0.0000, -0.8660], [0.5000, 0.6667]),
    v([-6.5659, 0.0000, -2.4620], [0.1736, 0.0000, -0.9848], [0.5000, 0.7222]),
    v([-7.4341, 0.0000, -2.4620], [-0.1736, 0.0000, -0.9848], [0.5000, 0.7778]),
    v([-8.2500, 0.0000, -2.1651], [-0.5000, 0.0000, -0.8660], [0.5000, 0.8333]),
    v([-8.9151, 0.0000, -1.6070], [-0.7660, 0.0000, -0.6428], [0.5000, 0.8889]),
    v([-9.3492, 0.0000, -0.8551], [-0.9397, 0.0000, -0.3420], [0.5000, 0.9444]),
    v([-9.5000, 0.0000, 0.0000], [-1.0000, 0.0000, 0.0000], [0.5000, 1.0000]),
    v([-9.3557, -1.6497, 0.0000], [-0.9848, -0.1736, 0.0000], [0.5278, 0.0000]),
    v([-9.2072, -1.6235, 0.8551], [-0.9254, -0.1632, 0.3420], [0.5278, 0.0556]),
    v([-8.7797, -1.5481, 1.6070], [-0.7544, -0.1330, 0.6428], [0.5278, 0.1111]),
    v([-8.1247, -1.4326, 2.1651], [-0.4924, -0.0868, 0.8660], [0.5278, 0.1667]),
    v([-7.3212, -1.2909, 2.4620], [-0.1710, -0.0302, 0.9848], [0.5278, 0.2222]),
    v([-6.4661, -1.1402, 2.4620], [0.1710, 0.0302, 0.9848], [0.5278, 0.2778]),
    v([-5.6626, -0.9985, 2.1651], [0.4924, 0.0868, 0.8660], [0.5278, 0.3333]),
    v([-5.0076, -0.8830, 1.6070], [0.7544, 0.1330, 0.6428], [0.5278, 0.3889]),
    v([-4.5801, -0.8076, 0.8551], [0.9254, 0.1632, 0.3420], [0.5278, 0.4444]),
    v([-4.4316, -0.7814, 0.0000], [0.9848, 0.1736, 0.0000], [0.5278, 0.5000]),
    v([-4.5801, -0.8076, -0.8551], [0.9254, 0.1632, -0.3420], [0.5278, 0.5556]),
    v([-5.0076, -0.8830, -1.6070], [0.7544, 0.1330, -0.6428], [0.5278, 0.6111]),
    v([-5.6626, -0.9985, -2.1651], [0.4924, 0.0868, -0.8660], [0.5278, 0.6667]),
    v([-6.4661, -1.1402, -2.4620], [0.1710, 0.0302, -0.9848], [0.5278, 0.7222]),
    v([-7.3212, -1.2909, -2.4620], [-0.1710, -0.0302, -0.9848], [0.5278, 0.7778]),
    v([-8.1247, -1.4326, -2.1651], [-0.4924, -0.0868, -0.8660], [0.5278, 0.8333]),
    v([-8.7797, -1.5481, -1.6070], [-0.7544, -0.1330, -0.6428], [0.5278, 0.8889]),
    v([-9.2072, -1.6235, -0.8551], [-0.9254, -0.1632, -0.3420], [0.5278, 0.9444]),
    v([-9.3557, -1.6497, 0.0000], [-0.9848, -0.1736, 0.0000], [0.5278, 1.0000]),
    v([-8.9271, -3.2492, 0.0000], [-0.9397, -0.3420, 0.0000], [0.5556, 0.0000]),
    v([-8.7854, -3.1976, 0.8551], [-0.8830, -0.3214, 0.3420], [0.5556, 0.0556]),
    v([-8.3775, -3.0491, 1.6070], [-0.7198, -0.2620, 0.6428], [0.5556, 0.1111]),
    v([-7.7525, -2.8217, 2.1651], [-0.4698, -0.1710, 0.8660], [0.5556, 0.1667]),
    v([-6.9858, -2.5426, 2.4620], [-0.1632, -0.0594, 0.9848], [0.5556, 0.2222]),
    v([-6.1699, -2.2457, 2.4620], [0.1632, 0.0594, 0.9848], [0.5556, 0.2778]),
    v([-5.4032, -1.9666, 2.1651], [0.4698, 0.1710, 0.8660], [0.5556, 0.3333]),
    v([-4.7782, -1.7391, 1.6070], [0.7198, 0.2620, 0.6428], [0.5556, 0.3889]),
    v([-4.3703, -1.5907, 0.8551], [0.8830, 0.3214, 0.3420], [0.5556, 0.4444]),
    v([-4.2286, -1.5391, 0.0000], [0.9397, 0.3420, 0.0000], [0.5556, 0.5000]),
    v([-4.3703, -1.5907, -0.8551], [0.8830, 0.3214, -0.3420], [0.5556, 0.5556]),
    v([-4.7782, -1.7391, -1.6070], [0.7198, 0.2620, -0.6428], [0.5556, 0.6111]),
    v([-5.4032, -1.9666, -2.1651], [0.4698, 0.1710, -0.8660], [0.5556, 0.6667]),
    v([-6.1699, -2.2457, -2.4620], [0.1632, 0.0594, -0.9848], [0.5556, 0.7222]),
    v([-6.9858, -2.5426, -2.4620], [-0.1632, -0.0594, -0.9848], [0.5556, 0.7778]),
    v([-7.7525, -2.8217, -2.1651], [-0.4698, -0.1710, -0.8660], [0.5556, 0.8333]),
    v([-8.3775, -3.0491, -1.6070], [-0.7198, -0.2620, -0.6428], [0.5556, 0.8889]),
    v([-8.7854, -3.1976, -0.8551], [-0.8830, -0.3214, -0.3420], [0.5556, 0.9444]),
    v([-8.9271, -3.2492, 0.0000], [-0.9397, -0.3420, 0.0000], [0.5556, 1.0000]),
    v([-8.2272, -4.7500, 0.0000], [-0.8660, -0.5000, 0.0000], [0.5833, 0.0000]),
    v([-8.0967, -4.6746, 0.8551], [-0.8138, -0.4698, 0.3420], [0.5833, 0.0556]),
    v([-7.7207, -4.4576, 1.6070], [-0.6634, -0.3830, 0.6428], [0.5833, 0.1111]),
    v([-7.1447, -4.1250, 2.1651], [-0.4330, -0.2500, 0.8660], [0.5833, 0.1667]),
    v([-6.4381, -3.7171, 2.4620], [-0.1504, -0.0868, 0.9848], [0.5833, 0.2222]),
    v([-5.6862, -3.2829, 2.4620], [0.1504, 0.0868, 0.9848], [0.5833, 0.2778]),
    v([-4.9796, -2.8750, 2.1651], [0.4330, 0.2500, 0.8660], [0.5833, 0.3333]),
    v([-4.4036, -2.5424, 1.6070], [0.6634, 0.3830, 0.6428], [0.5833, 0.3889]),
    v([-4.0277, -2.3254, 0.8551], [0.8138, 0.4698, 0.3420], [0.5833, 0.4444]),
    v([-3.8971, -2.2500, 0.0000], [0.8660, 0.5000, 0.0000], [0.5833, 0.5000]),
    v([-4.0277, -2.3254, -0.8551], [0.8138, 0.4698, -0.3420], [0.5833, 0.5556]),
    v([-4.4036, -2.5424, -1.6070], [0.6634, 0.3830, -0.6428], [0.5833, 0.6111]),
    v([-4.9796, -2.8750, -2.1651], [0.4330, 0.2500, -0.8660], [0.5833, 0.6667]),
    v([-5.6862, -3.2829, -2.4620], [0.1504, 0.0868, -0.9848], [0.5833, 0.7222]),
    v([-6.4381, -3.7171, -2.4620], [-0.1504, -0.0868, -0.9848], [0.5833, 0.7778]),
    v([-7.1447, -4.1250, -2.1651], [-0.4330, -0.2500, -0.8660], [0.5833, 0.8333]),
    v([-7.7207, -4.4576, -1.6070], [-0.6634, -0.3830, -0.6428], [0.5833, 0.8889]),
    v([-8.0967, -4.6746, -0.8551], [-0.8138, -0.4698, -0.3420], [0.5833, 0.9444]),
    v([-8.2272, -4.7500, 0.0000], [-0.8660, -0.5000, 0.0000], [0.5833, 1.0000]),
    v([-7.2774, -6.1065, 0.0000], [-0.7660, -0.6428, 0.0000], [0.6111, 0.0000]),
    v([-7.1619, -6.0096, 0.8551], [-0.7198, -0.6040, 0.3420], [0.6111, 0.0556]),
    v([-6.8294, -5.7305, 1.6070], [-0.5868, -0.4924, 0.6428], [0.6111, 0.1111]),
    v([-6.3199, -5.3030, 2.1651], [-0.3830, -0.3214, 0.8660], [0.6111, 0.1667]),
    v([-5.6949, -4.7786, 2.4620], [-0.1330, -0.1116, 0.9848], [0.6111, 0.2222]),
    v([-5.0298, -4.2205, 2.4620], [0.1330, 0.1116, 0.9848], [0.6111, 0.2778]),
    v([-4.4048, -3.6960, 2.1651], [0.3830, 0.3214, 0.8660], [0.6111, 0.3333]),
    v([-3.8953, -3.2685, 1.6070], [0.5868, 0.4924, 0.6428], [0.6111, 0.3889]),
    v([-3.5627, -2.9895, 0.8551], [0.7198, 0.6040, 0.3420], [0.6111, 0.4444]),
    v([-3.4472, -2.8925, 0.0000], [0.7660, 0.6428, 0.0000], [0.6111, 0.5000]),
    v([-3.5627, -2.9895, -0.8551], [0.7198, 0.6040, -0.3420], [0.6111, 0.5556]),
    v([-3.8953, -3.2685, -1.6070], [0.5868, 0.4924, -0.6428], [0.6111, 0.6111]),
    v([-4.4048, -3.6960, -2.1651], [0.3830, 0.3214, -0.8660], [0.6111, 0.6667]),
    v([-5.0298, -4.2205, -2.4620], [0.1330, 0.1116, -0.9848], [0.6111, 0.7222]),
    v([-5.6949, -4.7786, -2.4620], [-0.1330, -0.1116, -0.9848], [0.6111, 0.7778]),
    v([-6.3199, -5.3030, -2.1651], [-0.3830, -0.3214, -0.8660], [0.6111, 0.8333]),
    v([-6.8294, -5.7305, -1.6070], [-0.5868, -0.4924, -0.6428], [0.6111, 0.8889]),
    v([-7.1619, -6.0096, -0.8551], [-0.7198, -0.6040, -0.3420], [0.6111, 0.9444]),
    v([-7.2774, -6.1065, 0.0000], [-0.7660, -0.6428, 0.0000], [0.6111, 1.0000]),
    v([-6.1065, -7.2774, 0.0000], [-0.6428, -0.7660, 0.0000], [0.6389, 0.0000]),
    v([-6.0096, -7.1619, 0.8551], [-0.6040, -0.7198, 0.3420], [0.6389, 0.0556]),
    v([-5.7305, -6.8294, 1.6070], [-0.4924, -0.5868, 0.6428], [0.6389, 0.1111]),
    v([-5.3030, -6.3199, 2.1651], [-0.3214, -0.3830, 0.8660], [0.6389, 0.1667]),
    v([-4.7786, -5.6949, 2.4620], [-0.1116, -0.1330, 0.9848], [0.6389, 0.2222]),
    v([-4.2205, -5.0298, 2.4620], [0.1116, 0.1330, 0.9848], [0.6389, 0.2778]),
    v([-3.6960, -4.4048, 2.1651], [0.3214, 0.3830, 0.8660], [0.6389, 0.3333]),
    v([-3.2685, -3.8953, 1.6070], [0.4924, 0.5868, 0.6428], [0.6389, 0.3889]),
    v([-2.9895, -3.5627, 0.8551], [0.6040, 0.7198, 0.3420], [0.6389, 0.4444]),
    v([-2.8925, -3.4472, 0.0000], [0.6428, 0.7660, 0.0000], [0.6389, 0.5000]),
    v([-2.9895, -3.5627, -0.8551], [0.6040, 0.7198, -0.3420], [0.6389, 0.5556]),
    v([-3.2685, -3.8953, -1.6070], [0.4924, 0.5868, -0.6428], [0.6389, 0.6111]),
    v([-3.6960, -4.4048, -2.1651], [0.3214, 0.3830, -0.8660], [0.6389, 0.6667]),
    v([-4.2205, -5.0298, -2.4620], [0.1116, 0.1330, -0.9848], [0.6389, 0.7222]),
    v([-4.7786, -5.6949, -2.4620], [-0.1116, -0.1330, -0.9848], [0.6389, 0.7778]),
    v([-5.3030, -6.3199, -2.1651], [-0.3214, -0.3830, -0.8660], [0.6389, 0.8333]),
    v([-5.7305, -6.8294, -1.6070], [-0.4924, -0.5868, -0.6428], [0.6389, 0.8889]),
    v([-6.0096, -7.1619, -0.8551], [-0.6040, -0.7198, -0.3420], [0.6389, 0.9444]),
    v([-6.1065, -7.2774, 0.0000], [-0.6428, -0.7660, 0.0000], [0.6389, 1.0000]),
    v([-4.7500, -8.2272, 0.0000], [-0.5000, -0.8660, 0.0000], [0.6667, 0.0000]),
    v([-4.6746, -8.0967, 0.8551], [-0.4698, -0.8138, 0.3420], [0.6667, 0.0556]),
    v([-4.4576, -7.7207, 1.6070], [-0.3830, -0.6634, 0.6428], [0.6667, 0.1111]),
    v([-4.1250, -7.1447, 2.1651], [-0.2500, -0.4330, 0.8660], [0.6667, 0.1667]),
    v([-3.7171, -6.4381, 2.4620], [-0.0868, -0.1504, 0.9848], [0.6667, 0.2222]),
    v([-3.2829, -5.6862, 2.4620], [0.0868, 0.1504, 0.9848], [0.6667, 0.2778]),
    v([-2.8750, -4.9796, 2.1651], [0.2500, 0.4330, 0.8660], [0.6667, 0.3333]),
    v([-2.5424, -4.4036, 1.6070], [0.3830, 0.6634, 0.6428], [0.6667, 0.3889]),
    v([-2.3254, -4.0277, 0.8551], [0.4698, 0.8138, 0.3420], [0.6667, 0.4444]),
    v([-2.2500, -3.8971, 0.0000], [0.5000, 0.8660, 0.0000], [0.6667, 0.5000]),
    v([-2.3254, -4.0277, -0.8551], [0.4698, 0.8138, -0.3420], [0.6667, 0.5556]),
    v([-2.5424, -4.4036, -1.6070], [0.3830, 0.6634, -0.6428], [0.6667, 0.6111]),
    v([-2.8750, -4.9796, -2.1651], [0.2500, 0.4330, -0.8660], [0.6667, 0.6667]),
    v([-3.2829, -5.6862, -2.4620], [0.0868, 0.1504, -0.9848], [0.6667, 0.7222]),
    v([-3.7171, -6.4381, -2.4620], [-0.0868, -0.1504, -0.9848], [0.6667, 0.7778]),
    v([-4.1250, -7.1447, -2.1651], [-0.2500, -0.4330, -0.8660], [0.6667, 0.8333]),
    v([-4.4576, -7.7207, -1.6070], [-0.3830, -0.6634, -0.6428], [0.6667, 0.8889]),
    v([-4.6746, -8.0967, -0.8551], [-0.4698, -0.8138, -0.3420], [0.6667, 0.9444]),
    v([-4.7500, -8.2272, 0.0000], [-0.5000, -0.8660, 0.0000], [0.6667, 1.0000]),
    v([-3.2492, -8.9271, 0.0000], [-0.3420, -0.9397, 0.0000], [0.6944, 0.0000]),
    v([-3.1976, -8.7854, 0.8551], [-0.3214, -0.8830, 0.3420], [0.6944, 0.0556]),
    v([-3.0491, -8.3775, 1.6070], [-0.2620, -0.7198, 0.6428], [0.6944, 0.1111]),
    v([-2.8217, -7.7525, 2.1651], [-0.1710, -0.4698, 0.8660], [0.6944, 0.1667]),
    v([-2.5426, -6.9858, 2.4620], [-0.0594, -0.1632, 0.9848], [0.6944, 0.2222]),
    v([-2.2457, -6.1699, 2.4620], [0.0594, 0.1632, 0.9848], [0.6944, 0.2778]),
    v([-1.9666, -5.4032, 2.1651], [0.1710, 0.4698, 0.8660], [0.6944, 0.3333]),
    v([-1.7391, -4.7782, 1.6070], [0.2620, 0.7198, 0.6428], [0.6944, 0.3889]),
    v([-1.5907, -4.3703, 0.8551], [0.3214, 0.8830, 0.3420], [0.6944, 0.4444]),
    v([-1.5391, -4.2286, 0.0000], [0.3420, 0.9397, 0.0000], [0.6944, 0.5000]),
    v([-1.5907, -4.3703, -0.8551], [0.3214, 0.8830, -0.3420], [0.6944, 0.5556]),
    v([-1.7391, -4.7782, -1.6070], [0.2620, 0.7198, -0.6428], [0.6944, 0.6111]),
    v([-1.9666, -5.4032, -2.1651], [0.1710, 0.4698, -0.8660], [0.6944, 0.6667]),
    v([-2.2457, -6.1699, -2.4620], [0.0594, 0.1632, -0.9848], [0.6944, 0.7222]),
    v([-2.5426, -6.9858, -2.4620], [-0.0594, -0.1632, -0.9848], [0.6944, 0.7778]),
    v([-2.8217, -7.7525, -2.1651], [-0.1710, -0.4698, -0.8660], [0.6944, 0.8333]),
    v([-3.0491, -8.3775, -1.6070], [-0.2620, -0.7198, -0.6428], [0.6944, 0.8889]),
    v([-3.1976, -8.7854, -0.8551], [-0.3214, -0.8830, -0.3420], [0.6944, 0.9444]),
    v([-3.2492, -8.9271, 0.0000], [-0.3420, -0.9397, 0.0000], [0.6944, 1.0000]),
    v([-1.6497, -9.3557, 0.0000], [-0.1736, -0.9848, 0.0000], [0.7222, 0.0000]),
    v([-1.6235, -9.2072, 0.8551], [-0.1632, -0.9254, 0.3420], [0.7222, 0.0556]),
    v([-1.5481, -8.7797, 1.6070], [-0.1330, -0.7544, 0.6428], [0.7222, 0.1111]),
    v([-1.4326, -8.1247, 2.1651], [-0.0868, -0.4924, 0.8660], [0.7222, 0.1667]),
    v([-1.2909, -7.3212, 2.4620], [-0.0302, -0.1710, 0.9848], [0.7222, 0.2222]),
    v([-1.1402, -6.4661, 2.4620], [0.0302, 0.1710, 0.9848], [0.7222, 0.2778]),
    v([-0.9985, -5.6626, 2.1651], [0.0868, 0.4924, 0.8660], [0.7222, 0.3333]),
    v([-0.8830, -5.0076, 1.6070], [0.1330, 0.7544, 0.6428], [0.7222, 0.3889]),
    v([-0.8076, -4.5801, 0.8551], [0.1632, 0.9254, 0.3420], [0.7222, 0.4444]),
    v([-0.7814, -4.4316, 0.0000], [0.1736, 0.9848, 0.0000], [0.7222, 0.5000]),
    v([-0.8076, -4.5801, -0.8551], [0.1632, 0.9254, -0.3420], [0.7222, 0.5556]),
    v([-0.8830, -5.0076, -1.6070], [0.1330, 0.7544, -0.6428], [0.7222, 0.6111]),
    v([-0.9985, -5.6626, -2.1651], [0.0868, 0.4924, -0.8660], [0.7222, 0.6667]),
    v([-1.1402, -6.4661, -2.4620], [0.0302, 0.1710, -0.9848], [0.7222, 0.7222]),
    v([-1.2909, -7.3212, -2.4620], [-0.0302, -0.1710, -0.9848], [0.7222, 0.7778]),
    v([-1.4326, -8.1247, -2.1651], [-0.0868, -0.4924, -0.8660], [0.7222, 0.8333]),
    v([-1.5481, -8.7797, -1.6070], [-0.1330, -0.7544, -0.6428], [0.7222, 0.8889]),
    v([-1.6235, -9.2072, -0.8551], [-0.1632, -0.9254, -0.3420], [0.7222, 0.9444]),
    v([-1.6497, -9.3557, 0.0000], [-0.1736, -0.9848, 0.0000], [0.7222, 1.0000]),
    v([0.0000, -9.5000, 0.0000], [0.0000, -1.0000, 0.0000], [0.7500, 0.0000]),
    v([0.0000, -9.3492, 0.8551], [0.0000, -0.9397, 0.3420], [0.7500, 0.0556]),
    v([0.0000, -8.9151, 1.6070], [0.0000, -0.7660, 0.6428], [0.7500, 0.1111]),
    v([0.0000, -8.2500, 2.1651], [0.0000, -0.5000, 0.8660], [0.7500, 0.1667]),
    v([0.0000, -7.4341, 2.4620], [0.0000, -0.1736, 0.9848], [0.7500, 0.2222]),
    v([0.0000, -6.5659, 2.4620], [0.0000, 0.1736, 0.9848], [0.7500, 0.2778]),
    v([0.0000, -5.7500, 2.1651], [0.0000, 0.5000, 0.8660], [0.7500, 0.3333]),
    v([0.0000, -5.0849, 1.6070], [0.0000, 0.7660, 0.6428], [0.7500, 0.3889]),
    v([0.0000, -4.6508, 0.8551], [0.0000, 0.9397, 0.3420], [0.7500, 0.4444]),
    v([0.0000, -4.5000, 0.0000], [0.0000, 1.0000, 0.0000], [0.7500, 0.5000]),
    v([0.0000, -4.6508, -0.8551], [0.0000, 0.9397, -0.3420], [0.7500, 0.5556]),
    v([0.0000, -5.0849, -1.6070], [0.0000, 0.7660, -0.6428], [0.7500, 0.6111]),
    v([0.0000, -5.7500, -2.1651], [0.0000, 0.5000, -0.8660], [0.7500, 0.6667]),
    v([0.0000, -6.5659, -2.4620], [0.0000, 0.1736, -0.9848], [0.7500, 0.7222]),
    v([0.0000, -7.4341, -2.4620], [0.0000, -0.1736, -0.9848], [0.7500, 0.7778]),
    v([0.0000, -8.2500, -2.1651], [0.0000, -0.5000, -0.8660], [0.7500, 0.8333]),
    v([0.0000, -8.9151, -1.6070], [0.0000, -0.7660, -0.6428], [0.7500, 0.8889]),
    v([0.0000, -9.3492, -0.8551], [0.0000, -0.9397, -0.3420], [0.7500, 0.9444]),
    v([0.0000, -9.5000, 0.0000], [0.0000, -1.0000, 0.0000], [0.7500, 1.0000]),
    v([1.6497, -9.3557, 0.0000], [0.1736, -0.9848, 0.0000], [0.7778, 0.0000]),
    v([1.6235, -9.2072, 0.8551], [0.1632, -0.9254, 0.3420], [0.7778, 0.0556]),
    v([1.5481, -8.7797, 1.6070], [0.1330, -0.7544, 0.6428], [0.7778, 0.1111]),
    v([1.4326, -8.1247, 2.1651], [0.0868, -0.4924, 0.8660], [0.7778, 0.1667]),
    v([1.2909, -7.3212, 2.4620], [0.0302, -0.1710, 0.9848], [0.7778, 0.2222]),
    v([1.1402, -6.4661, 2.4620], [-0.0302, 0.1710, 0.9848], [0.7778, 0.2778]),
    v([0.9985, -5.6626, 2.1651], [-0.0868, 0.4924, 0.8660], [0.7778, 0.3333]),
    v([0.8830, -5.0076, 1.6070], [-0.1330, 0.7544, 0.6428], [0.7778, 0.3889]),
    v([0.8076, -4.5801, 0.8551], [-0.1632, 0.9254, 0.3420], [0.7778, 0.4444]),
    v([0.7814, -4.4316, 0.0000], [-0.1736, 0.9848, 0.0000], [0.7778, 0.5000]),
    v([0.8076, -4.5801, -0.8551], [-0.1632, 0.9254, -0.3420], [0.7778, 0.5556]),
    v([0.8830, -5.0076, -1.6070], [-0.1330, 0.7544, -0.6428], [0.7778, 0.6111]),
    v([0.9985, -5.6626, -2.1651], [-0.0868, 0.4924, -0.8660], [0.7778, 0.6667]),
    v([1.1402, -6.4661, -2.4620], [-0.0302, 0.1710, -0.9848], [0.7778, 0.7222]),
    v([1.2909, -7.3212, -2.4620], [0.0302, -0.1710, -0.9848], [0.7778, 0.7778]),
    v([1.4326, -8.1247, -2.1651], [0.0868, -0.4924, -0.8660], [0.7778, 0.8333]),
    v([1.5481, -8.7797, -1.6070], [0.1330, -0.7544, -0.6428], [0.7778, 0.8889]),
    v([1.6235, -9.2072, -0.8551], [0.1632, -0.9254, -0.3420], [0.7778, 0.9444]),
    v([1.6497, -9.3557, 0.0000], [0.1736, -0.9848, 0.0000], [0.7778, 1.0000]),
    v([3.2492, -8.9271, 0.0000], [0.3420, -0.9397, 0.0000], [0.8056, 0.0000]),
    v([3.1976, -8.7854, 0.8551], [0.3214, -0.8830, 0.3420], [0.8056, 0.0556]),
    v([3.0491, -8.3775, 1.6070], [0.2620, -0.7198, 0.6428], [0.8056, 0.1111]),
    v([2.8217, -7.7525, 2.1651], [0.1710, -0.4698, 0.8660], [0.8056, 0.1667]),
    v([2.5426, -6.9858, 2.4620], [0.0594, -0.1632, 0.9848], [0.8056, 0.2222]),
    v([2.2457, -6.1699, 2.4620], [-0.0594, 0.1632, 0.9848], [0.8056, 0.2778]),
    v([1.9666, -5.4032, 2.1651], [-0.1710, 0.4698, 0.8660], [0.8056, 0.3333]),
    v([1.7391, -4.7782, 1.6070], [-0.2620, 0.7198, 0.6428], [0.8056, 0.3889]),
    v([1.5907, -4.3703, 0.8551], [-0.3214, 0.8830, 0.3420], [0.8056, 0.4444]),
    v([1.5391, -4.2286, 0.0000], [-0.3420, 0.9397, 0.0000], [0.8056, 0.5000]),
    v([1.5907, -4.3703, -0.8551], [-0.3214, 0.8830, -0.3420], [0.8056, 0.5556]),
    v([1.7391, -4.7782, -1.6070], [-0.2620, 0.7198, -0.6428], [0.8056, 0.6111]),
    v([1.9666, -5.4032, -2.1651], [-0.1710, 0.4698, -0.8660], [0.8056, 0.6667]),
    v([2.2457, -6.1699, -2.4620], [-0.0594, 0.1632, -0.9848], [0.8056, 0.7222]),
    v([2.5426, -6.9858, -2.4620], [0.0594, -0.1632, -0.9848], [0.8056, 0.7778]),
    v([2.8217, -7.7525, -2.1651], [0.1710, -0.4698, -0.8660], [0.8056, 0.8333]),
    v([3.0491, -8.3775, -1.6070], [0.2620, -0.7198, -0.6428], [0.8056, 0.8889]),
    v([3.1976, -8.7854, -0.8551], [0.3214, -0.8830, -0.3420], [0.8056, 0.9444]),
    v([3.2492, -8.9271, 0.0000], [0.3420, -0.9397, 0.0000], [0.8056, 1.0000]),
    v([4.7500, -8.2272, 0.0000], [0.5000, -0.8660, 0.0000], [0.8333, 0.0000]),
    v([4.6746, -8.0967, 0.8551], [0.4698, -0.8138, 0.3420], [0.8333, 0.0556]),
    v([4.4576, -7.7207, 1.6070], [0.3830, -0.6634, 0.6428], [0.8333, 0.1111]),
    v([4.1250, -7.1447, 2.1651], [0.2500, -0.4330, 0.8660], [0.8333, 0.1667]),
    v([3.7171, -6.4381, 2.4620], [0.0868, -0.1504, 0.9848], [0.8333, 0.2222]),
    v([3.2829, -5.6862, 2.4620], [-0.0868, 0.1504, 0.9848], [0.8333, 0.2778]),
    v([2.8750, -4.9796, 2.1651], [-0.2500, 0.4330, 0.8660], [0.8333, 0.3333]),
    v([2.5424, -4.4036, 1.6070], [-0.3830, 0.6634, 0.6428], [0.8333, 0.3889]),
    v([2.3254, -4.0277, 0.8551], [-0.4698, 0.8138, 0.3420], [0.8333, 0.4444]),
    v([2.2500, -3.8971, 0.0000], [-0.5000, 0.8660, 0.0000], [0.8333, 0.5000]),
    v([2.3254, -4.0277, -0.8551], [-0.4698, 0.8138, -0.3420], [0.8333, 0.5556]),
    v([2.5424, -4.4036, -1.6070], [-0.3830, 0.6634, -0.6428], [0.8333, 0.6111]),
    v([2.8750, -4.9796, -2.1651], [-0.2500, 0.4330, -0.8660], [0.8333, 0.6667]),
    v([3.2829, -5.6862, -2.4620], [-0.0868, 0.1504, -0.9848], [0.8333, 0.7222]),
    v([3.7171, -6.4381, -2.4620], [0.0868, -0.1504, -0.9848], [0.8333, 0.7778]),
    v([4.1250, -7.1447, -2.1651], [0.2500, -0.4330, -0.8660], [0.8333, 0.8333]),
    v([4.4576, -7.7207, -1.6070], [0.3830, -0.6634, -0.6428], [0.8333, 0.8889]),
    v([4.6746, -8.0967, -0.8551], [0.4698, -0.8138, -0.3420], [0.8333, 0.9444]),
    v([4.7500, -8.2272, 0.0000], [0.5000, -0.8660, 0.0000], [0.8333, 1.0000]),
    v([6.1065, -7.2774, 0.0000], [0.6428, -0.7660, 0.0000], [0.8611, 0.0000]),
    v([6.0096, -7.1619, 0.8551], [0.6040, -0.7198, 0.3420], [0.8611, 0.0556]),
    v([5.7305, -6.8294, 1.6070], [0.4924, -0.5868, 0.6428], [0.8611, 0.1111]),
    v([5.3030, -6.3199, 2.1651], [0.3214, -0.3830, 0.8660], [0.8611, 0.1667]),
    v([4.7786, -5.6949, 2.4620], [0.1116, -0.1330, 0.9848], [0.8611, 0.2222]),
    v([4.2205, -5.0298, 2.4620], [-0.1116, 0.1330, 0.9848], [0.8611, 0.2778]),
    v([3.6960, -4.4048, 2.1651], [-0.3214, 0.3830, 0.8660], [0.8611, 0.3333]),
    v([3.2685, -3.8953, 1.6070], [-0.4924, 0.5868, 0.6428], [0.8611, 0.3889]),
    v([2.9895, -3.5627, 0.8551], [-0.6040, 0.7198, 0.3420], [0.8611, 0.4444]),
    v([2.8925, -3.4472, 0.0000], [-0.6428, 0.7660, 0.0000], [0.8611, 0.5000]),
    v([2.9895, -3.5627, -0.8551], [-0.6040, 0.7198, -0.3420], [0.8611, 0.5556]),
    v([3.2685, -3.8953, -1.6070], [-0.4924, 0.5868, -0.6428], [0.8611, 0.6111]),
    v([3.6960, -4.4048, -2.1651], [-0.3214, 0.3830, -0.8660], [0.8611, 0.6667]),
    v([4.2205, -5.0298, -2.4620], [-0.1116, 0.1330, -0.9848], [0.8611, 0.7222]),
    v([4.7786, -5.6949, -2.4620], [0.1116, -0.1330, -0.9848], [0.8611, 0.7778]),
    v([5.3030, -6.3199, -2.1651], [0.3214, -0.3830, -0.8660], [0.8611, 0.8333]),
    v([5.7305, -6.8294, -1.6070], [0.4924, -0.5868, -0.6428], [0.8611, 0.8889]),
    v([6.0096, -7.1619, -0.8551], [0.6040, -0.7198, -0.3420], [0.8611, 0.9444]),
    v([6.1065, -7.2774, 0.0000], [0.6428, -0.7660, 0.0000], [0.8611, 1.0000]),
    v([7.2774, -6.1065, 0.0000], [0.7660, -0.6428, 0.0000], [0.8889, 0.0000]),
    v([7.1619, -6.0096, 0.8551], [0.7198, -0.6040, 0.3420], [0.8889, 0.0556]),
    v([6.8294, -5.7305, 1.6070], [0.5868, -0.4924, 0.6428], [0.8889, 0.1111]),
    v([6.3199, -5.3030, 2.1651], [0.3830, -0.3214, 0.8660], [0.8889, 0.1667]),
    v([5.6949, -4.7786, 2.4620], [0.1330, -0.1116, 0.9848], [0.8889, 0.2222]),
    v([5.0298, -4.2205, 2.4620], [-0.1330, 0.1116, 0.9848], [0.8889, 0.2778]),
    v([4.4048, -3.6960, 2.1651], [-0.3830, 0.3214, 0.8660], [0.8889, 0.3333]),
    v([3.8953, -3.2685, 1.6070], [-0.5868, 0.4924, 0.6428], [0.8889, 0.3889]),
    v([3.5627, -2.9895, 0.8551], [-0.7198, 0.6040, 0.3420], [0.8889, 0.4444]),
    v([3.4472, -2.8925, 0.0000], [-0.7660, 0.6428, 0.0000], [0.8889, 0.5000]),
    v([3.5627, -2.9895, -0.8551], [-0.7198, 0.6040, -0.3420], [0.8889, 0.5556]),
    v([3.8953, -3.2685, -1.6070], [-0.5868, 0.4924, -0.6428], [0.8889, 0.6111]),
    v([4.4048, -3.6960, -2.1651], [-0.3830, 0.3214, -0.8660], [0.8889, 0.6667]),
    v([5.0298, -4.2205, -2.4620], [-0.1330, 0.1116, -0.9848], [0.8889, 0.7222]),
    v([5.6949, -4.7786, -2.4620], [0.1330, -0.1116, -0.9848], [0.8889, 0.7778]),
    v([6.3199, -5.3030, -2.1651], [0.3830, -0.3214, -0.8660], [0.8889, 0.8333]),
    v([6.8294, -5.7305, -1.6070], [0.5868, -0.4924, -0.6428], [0.8889, 0.8889]),
    v([7.1619, -6.0096, -0.8551], [0.7198, -0.6040, -0.3420], [0.8889, 0.9444]),
    v([7.2774, -6.1065, 0.0000], [0.7660, -0.6428, 0.0000], [0.8889, 1.0000]),
    v([8.2272, -4.7500, 0.0000], [0.8660, -0.5000, 0.0000], [0.9167, 0.0000]),
    v([8.0967, -4.6746, 0.8551], [0.8138, -0.4698, 0.3420], [0.9167, 0.0556]),
    v([7.7207, -4.4576, 1.6070], [0.6634, -0.3830, 0.6428], [0.9167, 0.1111]),
    v([7.1447, -4.1250, 2.1651], [0.4330, -0.2500, 0.8660], [0.9167, 0.1667]),
    v([6.4381, -3.7171, 2.4620], [0.1504, -0.0868, 0.9848], [0.9167, 0.2222]),
    v([5.6862, -3.2829, 2.4620], [-0.1504, 0.0868, 0.9848], [0.9167, 0.2778]),
    v([4.9796, -2.8750, 2.1651], [-0.4330, 0.2500, 0.8660], [0.9167, 0.3333]),
    v([4.4036, -2.5424, 1.6070], [-0.6634, 0.3830, 0.6428], [0.9167, 0.3889]),
    v([4.0277, -2.3254, 0.8551], [-0.8138, 0.4698, 0.3420], [0.9167, 0.4444]),
    v([3.8971, -2.2500, 0.0000], [-0.8660, 0.5000, 0.0000], [0.9167, 0.5000]),
    v([4.0277, -2.3254, -0.8551], [-0.8138, 0.4698, -0.3420], [0.9167, 0.5556]),
    v([4.4036, -2.5424, -1.6070], [-0.6634, 0.3830, -0.6428], [0.9167, 0.6111]),
    v([4.9796, -2.8750, -2.1651], [-0.4330, 0.2500, -0.8660], [0.9167, 0.6667]),
    v([5.6862, -3.2829, -2.4620], [-0.1504, 0.0868, -0.9848], [0.9167, 0.7222]),
    v([6.4381, -3.7171, -2.4620], [0.1504, -0.0868, -0.9848], [0.9167, 0.7778]),
    v([7.1447, -4.1250, -2.1651], [0.4330, -0.2500, -0.8660], [0.9167, 0.8333]),
    v([7.7207, -4.4576, -1.6070], [0.6634, -0.3830, -0.6428], [0.9167, 0.8889]),
    v([8.0967, -4.6746, -0.8551], [0.8138, -0.4698, -0.3420], [0.9167, 0.9444]),
    v([8.2272, -4.7500, 0.0000], [0.8660, -0.5000, 0.0000], [0.9167, 1.0000]),
    v([8.9271, -3.2492, 0.0000], [0.9397, -0.3420, 0.0000], [0.9444, 0.0000]),
    v([8.7854, -3.1976, 0.8551], [0.8830, -0.3214, 0.3420], [0.9444, 0.0556]),
    v([8.3775, -3.0491, 1.6070], [0.7198, -0.2620, 0.6428], [0.9444, 0.1111]),
    v([7.7525, -2.8217, 2.1651], [0.4698, -0.1710, 0.8660], [0.9444, 0.1667]),
    v([6.9858, -2.5426, 2.4620], [0.1632, -0.0594, 0.9848], [0.9444, 0.2222]),
    v([6.1699, -2.2457, 2.4620], [-0.1632, 0.0594, 0.9848], [0.9444, 0.2778]),
    v([5.4032, -1.9666, 2.1651], [-0.4698, 0.1710, 0.8660], [0.9444, 0.3333]),
    v([4.7782, -1.7391, 1.6070], [-0.7198, 0.2620, 0.6428], [0.9444, 0.3889]),
    v([4.3703, -1.5907, 0.8551], [-0.8830, 0.3214, 0.3420], [0.9444, 0.4444]),
    v([4.2286, -1.5391, 0.0000], [-0.9397, 0.3420, 0.0000], [0.9444, 0.5000]),
    v([4.3703, -1.5907, -0.8551], [-0.8830, 0.3214, -0.3420], [0.9444, 0.5556]),
    v([4.7782, -1.7391, -1.6070], [-0.7198, 0.2620, -0.6428], [0.9444, 0.6111]),
    v([5.4032, -1.9666, -2.1651], [-0.4698, 0.1710, -0.8660], [0.9444, 0.6667]),
    v([6.1699, -2.2457, -2.4620], [-0.1632, 0.0594, -0.9848], [0.9444, 0.7222]),
    v([6.9858, -2.5426, -2.4620], [0.1632, -0.0594, -0.9848], [0.9444, 0.7778]),
    v([7.7525, -2.8217, -2.1651], [0.4698, -0.1710, -0.8660], [0.9444, 0.8333]),
    v([8.3775, -3.0491, -1.6070], [0.7198, -0.2620, -0.6428], [0.9444, 0.8889]),
    v([8.7854, -3.1976, -0.8551], [0.8830, -0.3214, -0.3420], [0.9444, 0.9444]),
    v([8.9271, -3.2492, 0.0000], [0.9397, -0.3420, 0.0000], [0.9444, 1.0000]),
    v([9.3557, -1.6497, 0.0000], [0.9848, -0.1736, 0.0000], [0.9722, 0.0000]),
    v([9.2072, -1.6235, 0.8551], [0.9254, -0.1632, 0.3420], [0.9722, 0.0556]),
    v([8.7797, -1.5481, 1.6070], [0.7544, -0.1330, 0.6428], [0.9722, 0.1111]),
    v([8.1247, -1.4326, 2.1651], [0.4924, -0.0868, 0.8660], [0.9722, 0.1667]),
    v([7.3212, -1.2909, 2.4620], [0.1710, -0.0302, 0.9848], [0.9722, 0.2222]),
    v([6.4661, -1.1402, 2.4620], [-0.1710, 0.0302, 0.9848], [0.9722, 0.2778]),
    v([5.6626, -0.9985, 2.1651], [-0.4924, 0.0868, 0.8660], [0.9722, 0.3333]),
    v([5.0076, -0.8830, 1.6070], [-0.7544, 0.1330, 0.6428], [0.9722, 0.3889]),
    v([4.5801, -0.8076, 0.8551], [-0.9254, 0.1632, 0.3420], [0.9722, 0.4444]),
    v([4.4316, -0.7814, 0.0000], [-0.9848, 0.1736, 0.0000], [0.9722, 0.5000]),
    v([4.5801, -0.8076, -0.8551], [-0.9254, 0.1632, -0.3420], [0.9722, 0.5556]),
    v([5.0076, -0.8830, -1.6070], [-0.7544, 0.1330, -0.6428], [0.9722, 0.6111]),
    v([5.6626, -0.9985, -2.1651], [-0.4924, 0.0868, -0.8660], [0.9722, 0.6667]),
    v([6.4661, -1.1402, -2.4620], [-0.1710, 0.0302, -0.9848], [0.9722, 0.7222]),
    v([7.3212, -1.2909, -2.4620], [0.1710, -0.0302, -0.9848], [0.9722, 0.7778]),
    v([8.1247, -1.4326, -2.1651], [0.4924, -0.0868, -0.8660], [0.9722, 0.8333]),
    v([8.7797, -1.5481, -1.6070], [0.7544, -0.1330, -0.6428], [0.9722, 0.8889]),
    v([9.2072, -1.6235, -0.8551], [0.9254, -0.1632, -0.3420], [0.9722, 0.9444]),
    v([9.3557, -1.6497, 0.0000], [0.9848, -0.1736, 0.0000], [0.9722, 1.0000]),
    v([9.5000, 0.0000, 0.0000], [1.0000, 0.0000, 0.0000], [1.0000, 0.0000]),
    v([9.3492, 0.0000, 0.8551], [0.9397, 0.0000, 0.3420], [1.0000, 0.0556]),
    v([8.9151, 0.0000, 1.6070], [0.7660, 0.0000, 0.6428], [1.0000, 0.1111]),
    v([8.2500, 0.0000, 2.1651], [0.5000, 0.0000, 0.8660], [1.0000, 0.1667]),
    v([7.4341, 0.0000, 2.4620], [0.1736, 0.0000, 0.9848], [1.0000, 0.2222]),
    v([6.5659, 0.0000, 2.4620], [-0.1736, 0.0000, 0.9848], [1.0000, 0.2778]),
    v([5.7500, 0.0000, 2.1651], [-0.5000, 0.0000, 0.8660], [1.0000, 0.3333]),
    v([5.0849, 0.0000, 1.6070], [-0.7660, 0.0000, 0.6428], [1.0000, 0.3889]),
    v([4.6508, 0.0000, 0.8551], [-0.9397, 0.0000, 0.3420], [1.0000, 0.4444]),
    v([4.5000, 0.0000, 0.0000], [-1.0000, 0.0000, 0.0000], [1.0000, 0.5000]),
    v([4.6508, 0.0000, -0.8551], [-0.9397, 0.0000, -0.3420], [1.0000, 0.5556]),
    v([5.0849, 0.0000, -1.6070], [-0.7660, 0.0000, -0.6428], [1.0000, 0.6111]),
    v([5.7500, 0.0000, -2.1651], [-0.5000, 0.0000, -0.8660], [1.0000, 0.6667]),
    v([6.5659, 0.0000, -2.4620], [-0.1736, 0.0000, -0.9848], [1.0000, 0.7222]),
    v([7.4341, 0.0000, -2.4620], [0.1736, 0.0000, -0.9848], [1.0000, 0.7778]),
    v([8.2500, 0.0000, -2.1651], [0.5000, 0.0000, -0.8660], [1.0000, 0.8333]),
    v([8.9151, 0.0000, -1.6070], [0.7660, 0.0000, -0.6428], [1.0000, 0.8889]),
    v([9.3492, 0.0000, -0.8551], [0.9397, 0.0000, -0.3420], [1.0000, 0.9444]),
    v([9.5000, 0.0000, 0.0000], [1.0000, 0.0000, 0.0000], [1.0000, 1.0000]),
];

#[rustfmt::skip]
pub static MESH_INDICES: [Index; 3888] = [
    0, 19, 1, 19, 20, 1, 1, 20, 2, 20, 21, 2, 2, 21, 3, 21, 22, 3,
    3, 22, 4, 22, 23, 4, 4, 23, 5, 23, 24, 5, 5, 24, 6, 24, 25, 6,
    6, 25, 7, 25, 26, 7, 7, 26, 8, 26, 27, 8, 8, 27, 9, 27, 28, 9,
    9, 28, 10, 28, 29, 10, 10, 29, 11, 29, 30, 11, 11, 30, 12, 30, 31, 12,
    12, 31, 13, 31, 32, 13, 13, 32, 14, 32, 33, 14, 14, 33, 15, 33, 34, 15,
    15, 34, 16, 34, 35, 16, 16, 35, 17, 35, 36, 17, 17, 36, 18, 36, 37, 18,
    19, 38, 20, 38, 39, 20, 20, 39, 21, 39, 40, 21, 21, 40, 22, 40, 41, 22,
    22, 41, 23, 41, 42, 23, 23, 42, 24, 42, 43, 24, 24, 43, 25, 43, 44, 25,
    25, 44, 26, 44, 45, 26, 26, 45, 27, 45, 46, 27, 27, 46, 28, 46, 47, 28,
    28, 47, 29, 47, 48, 29, 29, 48, 30, 48, 49, 30, 30, 49, 31, 49, 50, 31,
    31, 50, 32, 50, 51, 32, 32, 51, 33, 51, 52, 33, 33, 52, 34, 52, 53, 34,
    34, 53, 35, 53, 54, 35, 35, 54, 36, 54, 55, 36, 36, 55, 37, 55, 56, 37,
    38, 57, 39, 57, 58, 39, 39, 58, 40, 58, 59, 40, 40, 59, 41, 59, 60, 41,
    41, 60, 42, 60, 61, 42, 42, 61, 43, 61, 62, 43, 43, 62, 44, 62, 63, 44,
    44, 63, 45, 63, 64, 45, 45, 64, 46, 64, 65, 46, 46, 65, 47, 65, 66, 47,
    47, 66, 48, 66, 67, 48, 48, 67, 49, 67, 68, 49, 49, 68, 50, 68, 69, 50,
    50, 69, 51, 69, 70, 51, 51, 70, 52, 70, 71, 52, 52, 71, 53, 71, 72, 53,
    53, 72, 54, 72, 73, 54, 54, 73, 55, 73, 74, 55, 55, 74, 56, 74, 75, 56,
    57, 76, 58, 76, 77, 58, 58, 77, 59, 77, 78, 59, 59, 78, 60, 78, 79, 60,
    60, 79, 61, 79, 80, 61, 61, 80, 62, 80, 81, 62, 62, 81, 63, 81, 82, 63,
    63, 82, 64, 82, 83, 64, 64, 83, 65, 83, 84, 65, 65, 84, 66, 84, 85, 66,
    66, 85, 67, 85, 86, 67, 67, 86, 68, 86, 87, 68, 68, 87, 69, 87, 88, 69,
    69, 88, 70, 88, 89, 70, 70, 89, 71, 89, 90, 71, 71, 90, 72, 90, 91, 72,
    72, 91, 73, 91, 92, 73, 73, 92, 74, 92, 93, 74, 74, 93, 75, 93, 94, 75,
    76, 95, 77, 95, 96, 77, 77, 96, 78, 96, 97, 78, 78, 97, 79, 97, 98, 79,
    79, 98, 80, 98, 99, 80, 80, 99, 81, 99, 100, 81, 81, 100, 82, 100, 101, 82,
    82, 101, 83, 101, 102, 83, 83, 102, 84, 102, 103, 84, 84, 103, 85, 103, 104, 85,
    85, 104, 86, 104, 105, 86, 86, 105, 87, 105, 106, 87, 87, 106, 88, 106, 107, 88,
    88, 107, 89, 107, 108, 89, 89, 108, 90, 108, 109, 90, 90, 109, 91, 109, 110, 91,
    91, 110, 92, 110, 111, 92, 92, 111, 93, 111, 112, 93, 93, 112, 94, 112, 113, 94,
    95, 114, 96, 114, 115, 96, 96, 115, 97, 115, 116, 97, 97, 116, 98, 116, 117, 98,
    98, 117, 99, 117, 118, 99, 99, 118, 100, 118, 119, 100, 100, 119, 101, 119, 120, 101,
    101, 120, 102, 120, 121, 102, 102, 121, 103, 121, 122, 103, 103, 122, 104, 122, 123, 104,
    104, 123, 105, 123, 124, 105, 105, 124, 106, 124, 125, 106, 106, 125, 107, 125, 126, 107,
    107, 126, 108, 126, 127, 108, 108, 127, 109, 127, 128, 109, 109, 128, 110, 128, 129, 110,
    110, 129, 111, 129, 130, 111, 111, 130, 112, 130, 131, 112, 112, 131, 113, 131, 132, 113,
    114, 133, 115, 133, 134, 115, 115, 134, 116, 134, 135, 116, 116, 135, 117, 135, 136, 117,
    117, 136, 118, 136, 137, 118, 118, 137, 119, 137, 138, 119, 119, 138, 120, 138, 139, 120,
    120, 139, 121, 139, 140, 121, 121, 140, 122, 140, 141, 122, 122, 141, 123, 141, 142, 123,
    123, 142, 124, 142, 143, 124, 124, 143, 125, 143, 144, 125, 125, 144, 126, 144, 145, 126,
    126, 145, 127, 145, 146, 127, 127, 146, 128, 146, 147, 128, 128, 147, 129, 147, 148, 129,
    129, 148, 130, 148, 149, 130, 130, 149, 131, 149, 150, 131, 131, 150, 132, 150, 151, 132,
    133, 152, 134, 152, 153, 134, 134, 153, 135, 153, 154, 135, 135, 154, 136, 154, 155, 136,
    136, 155, 137, 155, 156, 137, 137, 156, 138, 156, 157, 138, 138, 157, 139, 157, 158, 139,
    139, 158, 140, 158, 159, 140, 140, 159, 141, 159, 160, 141, 141, 160, 142, 160, 161, 142,
    142, 161, 143, 161, 162, 143, 143, 162, 144, 162, 163, 144, 144, 163, 145, 163, 164, 145,
    145, 164, 146, 164, 165, 146, 146, 165, 147, 165, 166, 147, 147, 166, 148, 166, 167, 148,
    148, 167, 149, 167, 168, 149, 149, 168, 150, 168, 169, 150, 150, 169, 151, 169, 170, 151,
    152, 171, 153, 171, 172, 153, 153, 172, 154, 172, 173, 154, 154, 173, 155, 173, 174, 155,
    155, 174, 156, 174, 175, 156, 156, 175, 157, 175, 176, 157, 157, 176, 158, 176, 177, 158,
    158, 177, 159, 177, 178, 159, 159, 178, 160, 178, 179, 160, 160, 179, 161, 179, 180, 161,
    161, 180, 162, 180, 181, 162, 162, 181, 163, 181, 182, 163, 163, 182, 164, 182, 183, 164,
    164, 183, 165, 183, 184, 165, 165, 184, 166, 184, 185, 166, 166, 185, 167, 185, 186, 167,
    167, 186, 168, 186, 187, 168, 168, 187, 169, 187, 188, 169, 169, 188, 170, 188, 189, 170,
    171, 190, 172, 190, 191, 172, 172, 191, 173, 191, 192, 173, 173, 192, 174, 192, 193, 174,
    174, 193, 175, 193, 194, 175, 175, 194, 176, 194, 195, 176, 176, 195, 177, 195, 196, 177,
    177, 196, 178, 196, 197, 178, 178, 197, 179, 197, 198, 179, 179, 198, 180, 198, 199, 180,
    180, 199, 181, 199, 200, 181, 181, 200, 182, 200, 201, 182, 182, 201, 183, 201, 202, 183,
    183, 202, 184, 202, 203, 184, 184, 203, 185, 203, 204, 185, 185, 204, 186, 204, 205, 186,
    186, 205, 187, 205, 206, 187, 187, 206, 188, 206, 207, 188, 188, 207, 189, 207, 208, 189,
    190, 209, 191, 209, 210, 191, 191, 210, 192, 210, 211, 192, 192, 211, 193, 211, 212, 193,
    193, 212, 194, 212, 213, 194, 194, 213, 195, 213, 214, 195, 195, 214, 196, 214, 215, 196,
    196, 215, 197, 215, 216, 197, 197, 216, 198, 216, 217, 198, 198, 217, 199, 217, 218, 199,
    199, 218, 200, 218, 219, 200, 200, 219, 201, 219, 220, 201, 201, 220, 202, 220, 221, 202,
    202, 221, 203, 221, 222, 203, 203, 222, 204, 222, 223, 204, 204, 223, 205, 223, 224, 205,
    205, 224, 206, 224, 225, 206, 206, 225, 207, 225, 226, 207, 207, 226, 208, 226, 227, 208,
    209, 228, 210, 228, 229, 210, 210, 229, 211, 229, 230, 211, 211, 230, 212, 230, 231, 212,
    212, 231, 213, 231, 232, 213, 213, 232, 214, 232, 233, 214, 214, 233, 215, 233, 234, 215,
    215, 234, 216, 234, 235, 216, 216, 235, 217, 235, 236, 217, 217, 236, 218, 236, 237, 218,
    218, 237, 219, 237, 238, 219, 219, 238, 220, 238, 239, 220, 220, 239, 221, 239, 240, 221,
    221, 240, 222, 240, 241, 222, 222, 241, 223, 241, 242, 223, 223, 242, 224, 242, 243, 224,
    224, 243, 225, 243, 244, 225, 225, 244, 226, 244, 245, 226, 226, 245, 227, 245, 246, 227,
    228, 247, 229, 247, 248, 229, 229, 248, 230, 248, 249, 230, 230, 249, 231, 249, 250, 231,
    231, 250, 232, 250, 251, 232, 232, 251, 233, 251, 252, 233, 233, 252, 234, 252, 253, 234,
    234, 253, 235, 253, 254, 235, 235, 254, 236, 254, 255, 236, 236, 255, 237, 255, 256, 237,
    237, 256, 238, 256, 257, 238, 238, 257, 239, 257, 258, 239, 239, 258, 240, 258, 259, 240,
    240, 259, 241, 259, 260, 241, 241, 260, 242, 260, 261, 242, 242, 261, 243, 261, 262, 243,
    243, 262, 244, 262, 263, 244, 244, 263, 245, 263, 264, 245, 245, 264, 246, 264, 265, 246,
    247, 266, 248, 266, 267, 248, 248, 267, 249, 267, 268, 249, 249, 268, 250, 268, 269, 250,
    250, 269, 251, 269, 270, 251, 251, 270, 252, 270, 271, 252, 252, 271, 253, 271, 272, 253,
    253, 272, 254, 272, 273, 254, 254, 273, 255, 273, 274, 255, 255, 274, 256, 274, 275, 256,
    256, 275, 257, 275, 276, 257, 257, 276, 258, 276, 277, 258, 258, 277, 259, 277, 278, 259,
    259, 278, 260, 278, 279, 260, 260, 279, 261, 279, 280, 261, 261, 280, 262, 280, 281, 262,
    262, 281, 263, 281, 282, 263, 263, 282, 264, 282, 283, 264, 264, 283, 265, 283, 284, 265,
    266, 285, 267, 285, 286, 267, 267, 286, 268, 286, 287, 268, 268, 287, 269, 287, 288, 269,
    269, 288, 270, 288, 289, 270, 270, 289, 271, 289, 290, 271, 271, 290, 272, 290, 291, 272,
    272, 291, 273, 291, 292, 273, 273, 292, 274, 292, 293, 274, 274, 293, 275, 293, 294, 275,
    275, 294, 276, 294, 295, 276, 276, 295, 277, 295, 296, 277, 277, 296, 278, 296, 297, 278,
    278, 297, 279, 297, 298, 279, 279, 298, 280, 298, 299, 280, 280, 299, 281, 299, 300, 281,
    281, 300, 282, 300, 301, 282, 282, 301, 283, 301, 302, 283, 283, 302, 284, 302, 303, 284,
    285, 304, 286, 304, 305, 286, 286, 305, 287, 305, 306, 287, 287, 306, 288, 306, 307, 288,
    288, 307, 289, 307, 308, 289, 289, 308, 290, 308, 309, 290, 290, 309, 291, 309, 310, 291,
    291, 310, 292, 310, 311, 292, 292, 311, 293, 311, 312, 293, 293, 312, 294, 312, 313, 294,
    294, 313, 295, 313, 314, 295, 295, 314, 296, 314, 315, 296, 296, 315, 297, 315, 316, 297,
    297, 316, 298, 316, 317, 298, 298, 317, 299, 317, 318, 299, 299, 318, 300, 318, 319, 300,
    300, 319, 301, 319, 320, 301, 301, 320, 302, 320, 321, 302, 302, 321, 303, 321, 322, 303,
    304, 323, 305, 323, 324, 305, 305, 324, 306, 324, 325, 306, 306, 325, 307, 325, 326, 307,
    307, 326, 308, 326, 327, 308, 308, 327, 309, 327, 328, 309, 309, 328, 310, 328, 329, 310,
    310, 329, 311, 329, 330, 311, 311, 330, 312, 330, 331, 312, 312, 331, 313, 331, 332, 313,
    313, 332, 314, 332, 333, 314, 314, 333, 315, 333, 334, 315, 315, 334, 316, 334, 335, 316,
    316, 335, 317, 335, 336, 317, 317, 336, 318, 336, 337, 318, 318, 337, 319, 337, 338, 319,
    319, 338, 320, 338, 339, 320, 320, 339, 321, 339, 340, 321, 321, 340, 322, 340, 341, 322,
    323, 342, 324, 342, 343, 324, 324, 343, 325, 343, 344, 325, 325, 344, 326, 344, 345, 326,
    326, 345, 327, 345, 346, 327, 327, 346, 328, 346, 347, 328, 328, 347, 329, 347, 348, 329,
    329, 348, 330, 348, 349, 330, 330, 349, 331, 349, 350, 331, 331, 350, 332, 350, 351, 332,
    332, 351, 333, 351, 352, 333, 333, 352, 334, 352, 353, 334, 334, 353, 335, 353, 354, 335,
    335, 354, 336, 354, 355, 336, 336, 355, 337, 355, 356, 337, 337, 356, 338, 356, 357, 338,
    338, 357, 339, 357, 358, 339, 339, 358, 340, 358, 359, 340, 340, 359, 341, 359, 360, 341,
    342, 361, 343, 361, 362, 343, 343, 362, 344, 362, 363, 344, 344, 363, 345, 363, 364, 345,
    345, 364, 346, 364, 365, 346, 346, 365, 347, 365, 366, 347, 347, 366, 348, 366, 367, 348,
    348, 367, 349, 367, 368, 349, 349, 368, 350, 368, 369, 350, 350, 369, 351, 369, 370, 351,
    351, 370, 352, 370, 371, 352, 352, 371, 353, 371, 372, 353, 353, 372, 354, 372, 373, 354,
    354, 373, 355, 373, 374, 355, 355, 374, 356, 374, 375, 356, 356, 375, 357, 375, 376, 357,
    357, 376, 358, 376, 377, 358, 358, 377, 359, 377, 378, 359, 359, 378, 360, 378, 379, 360,
    361, 380, 362, 380, 381, 362, 362, 381, 363, 381, 382, 363, 363, 382, 364, 382, 383, 364,
    364, 383, 365, 383, 384, 365, 365, 384, 366, 384, 385, 366, 366, 385, 367, 385, 386, 367,
    367, 386, 368, 386, 387, 368, 368, 387, 369, 387, 388, 369, 369, 388, 370, 388, 389, 370,
    370, 389, 371, 389, 390, 371, 371, 390, 372, 390, 391, 372, 372, 391, 373, 391, 392, 373,
    373, 392, 374, 392, 393, 374, 374, 393, 375, 393, 394, 375, 375, 394, 376, 394, 395, 376,
    376, 395, 377, 395, 396, 377, 377, 396, 378, 396, 397, 378, 378, 397, 379, 397, 398, 379,
    380, 399, 381, 399, 400, 381, 381, 400, 382, 400, 401, 382, 382, 401, 383, 401, 402, 383,
    383, 402, 384, 402, 403, 384, 384, 403, 385, 403, 404, 385, 385, 404, 386, 404, 405, 386,
    386, 405, 387, 405, 406, 387, 387, 406, 388, 406, 407, 388, 388, 407, 389, 407, 408, 389,
    389, 408, 390, 408, 409, 390, 390, 409, 391, 409, 410, 391, 391, 410, 392, 410, 411, 392,
    392, 411, 393, 411, 412, 393, 393, 412, 394, 412, 413, 394, 394, 413, 395, 413, 414, 395,
    395, 414, 396, 414, 415, 396, 396, 415, 397, 415, 416, 397, 397, 416, 398, 416, 417, 398,
    399, 418, 400, 418, 419, 400, 400, 419, 401, 419, 420, 401, 401, 420, 402, 420, 421, 402,
    402, 421, 403, 421, 422, 403, 403, 422, 404, 422, 423, 404, 404, 423, 405, 423, 424, 405,
    405, 424, 406, 424, 425, 406, 406, 425, 407, 425, 426, 407, 407, 426, 408, 426, 427, 408,
    408, 427, 409, 427, 428, 409, 409, 428, 410, 428, 429, 410, 410, 429, 411, 429, 430, 411,
    411, 430, 412, 430, 431, 412, 412, 431, 413, 431, 432, 413, 413, 432, 414, 432, 433, 414,
    414, 433, 415, 433, 434, 415, 415, 434, 416, 434, 435, 416, 416, 435, 417, 435, 436, 417,
    418, 437, 419, 437, 438, 419, 419, 438, 420, 438, 439, 420, 420, 439, 421, 439, 440, 421,
    421, 440, 422, 440, 441, 422, 422, 441, 423, 441, 442, 423, 423, 442, 424, 442, 443, 424,
    424, 443, 425, 443, 444, 425, 425, 444, 426, 444, 445, 426, 426, 445, 427, 445, 446, 427,
    427, 446, 428, 446, 447, 428, 428, 447, 429, 447, 448, 429, 429, 448, 430, 448, 449, 430,
    430, 449, 431, 449, 450, 431, 431, 450, 432, 450, 451, 432, 432, 451, 433, 451, 452, 433,
    433, 452, 434, 452, 453, 434, 434, 453, 435, 453, 454, 435, 435, 454, 436, 454, 455, 436,
    437, 456, 438, 456, 457, 438, 438, 457, 439, 457, 458, 439, 439, 458, 440, 458, 459, 440,
    440, 459, 441, 459, 460, 441, 441, 460, 442, 460, 461, 442, 442, 461, 443, 461, 462, 443,
    443, 462, 444, 462, 463, 444, 444, 463, 445, 463, 464, 445, 445, 464, 446, 464, 465, 446,
    446, 465, 447, 465, 466, 447, 447, 466, 448, 466, 467, 448, 448, 467, 449, 467, 468, 449,
    449, 468, 450, 468, 469, 450, 450, 469, 451, 469, 470, 451, 451, 470, 452, 470, 471, 452,
    452, 471, 453, 471, 472, 453, 453, 472, 454, 472, 473, 454, 454, 473, 455, 473, 474, 455,
    456, 475, 457, 475, 476, 457, 457, 476, 458, 476, 477, 458, 458, 477, 459, 477, 478, 459,
    459, 478, 460, 478, 479, 460, 460, 479, 461, 479, 480, 461, 461, 480, 462, 480, 481, 462,
    462, 481, 463, 481, 482, 463, 463, 482, 464, 482, 483, 464, 464, 483, 465, 483, 484, 465,
    465, 484, 466, 484, 485, 466, 466, 485, 467, 485, 486, 467, 467, 486, 468, 486, 487, 468,
    468, 487, 469, 487, 488, 469, 469, 488, 470, 488, 489, 470, 470, 489, 471, 489, 490, 471,
    471, 490, 472, 490, 491, 472, 472, 491, 473, 491, 492, 473, 473, 492, 474, 492, 493, 474,
    475, 494, 476, 494, 495, 476, 476, 495, 477, 495, 496, 477, 477, 496, 478, 496, 497, 478,
    478, 497, 479, 497, 498, 479, 479, 498, 480, 498, 499, 480, 480, 499, 481, 499, 500, 481,
    481, 500, 482, 500, 501, 482, 482, 501, 483, 501, 502, 483, 483, 502, 484, 502, 503, 484,
    484, 503, 485, 503, 504, 485, 485, 504, 486, 504, 505, 486, 486, 505, 487, 505, 506, 487,
    487, 506, 488, 506, 507, 488, 488, 507, 489, 507, 508, 489, 489, 508, 490, 508, 509, 490,
    490, 509, 491, 509, 510, 491, 491, 510, 492, 510, 511, 492, 492, 511, 493, 511, 512, 493,
    494, 513, 495, 513, 514, 495, 495, 514, 496, 514, 515, 496, 496, 515, 497, 515, 516, 497,
    497, 516, 498, 516, 517, 498, 498, 517, 499, 517, 518, 499, 499, 518, 500, 518, 519, 500,
    500, 519, 501, 519, 520, 501, 501, 520, 502, 520, 521, 502, 502, 521, 503, 521, 522, 503,
    503, 522, 504, 522, 523, 504, 504, 523, 505, 523, 524, 505, 505, 524, 506, 524, 525, 506,
    506, 525, 507, 525, 526, 507, 507, 526, 508, 526, 527, 508, 508, 527, 509, 527, 528, 509,
    509, 528, 510, 528, 529, 510, 510, 529, 511, 529, 530, 511, 511, 530, 512, 530, 531, 512,
    513, 532, 514, 532, 533, 514, 514, 533, 515, 533, 534, 515, 515, 534, 516, 534, 535, 516,
    516, 535, 517, 535, 536, 517, 517, 536, 518, 536, 537, 518, 518, 537, 519, 537, 538, 519,
    519, 538, 520, 538, 539, 520, 520, 539, 521, 539, 540, 521, 521, 540, 522, 540, 541, 522,
    522, 541, 523, 541, 542, 523, 523, 542, 524, 542, 543, 524, 524, 543, 525, 543, 544, 525,
    525, 544, 526, 544, 545, 526, 526, 545, 527, 545, 546, 527, 527, 546, 528, 546, 547, 528,
    528, 547, 529, 547, 548, 529, 529, 548, 530, 548, 549, 530, 530, 549, 531, 549, 550, 531,
    532, 551, 533, 551, 552, 533, 533, 552, 534, 552, 553, 534, 534, 553, 535, 553, 554, 535,
    535, 554, 536, 554, 555, 536, 536, 555, 537, 555, 556, 537, 537, 556, 538, 556, 557, 538,
    538, 557, 539, 557, 558, 539, 539, 558, 540, 558, 559, 540, 540, 559, 541, 559, 560, 541,
    541, 560, 542, 560, 561, 542, 542, 561, 543, 561, 562, 543, 543, 562, 544, 562, 563, 544,
    544, 563, 545, 563, 564, 545, 545, 564, 546, 564, 565, 546, 546, 565, 547, 565, 566, 547,
    547, 566, 548, 566, 567, 548, 548, 567, 549, 567, 568, 549, 549, 568, 550, 568, 569, 550,
    551, 570, 552, 570, 571, 552, 552, 571, 553, 571, 572, 553, 553, 572, 554, 572, 573, 554,
    554, 573, 555, 573, 574, 555, 555, 574, 556, 574, 575, 556, 556, 575, 557, 575, 576, 557,
    557, 576, 558, 576, 577, 558, 558, 577, 559, 577, 578, 559, 559, 578, 560, 578, 579, 560,
    560, 579, 561, 579, 580, 561, 561, 580, 562, 580, 581, 562, 562, 581, 563, 581, 582, 563,
    563, 582, 564, 582, 583, 564, 564, 583, 565, 583, 584, 565, 565, 584, 566, 584, 585, 566,
    566, 585, 567, 585, 586, 567, 567, 586, 568, 586, 587, 568, 568, 587, 569, 587, 588, 569,
    570, 589, 571, 589, 590, 571, 571, 590, 572, 590, 591, 572, 572, 591, 573, 591, 592, 573,
    573, 592, 574, 592, 593, 574, 574, 593, 575, 593, 594, 575, 575, 594, 576, 594, 595, 576,
    576, 595, 577, 595, 596, 577, 577, 596, 578, 596, 597, 578, 578, 597, 579, 597, 598, 579,
    579, 598, 580, 598, 599, 580, 580, 599, 581, 599, 600, 581, 581, 600, 582, 600, 601, 582,
    582, 601, 583, 601, 602, 583, 583, 602, 584, 602, 603, 584, 584, 603, 585, 603, 604, 585,
    585, 604, 586, 604, 605, 586, 586, 605, 587, 605, 606, 587, 587, 606, 588, 606, 607, 588,
    589, 608, 590, 608, 609, 590, 590, 609, 591, 609, 610, 591, 591, 610, 592, 610, 611, 592,
    592, 611, 593, 611, 612, 593, 593, 612, 594, 612, 613, 594, 594, 613, 595, 613, 614, 595,
    595, 614, 596, 614, 615, 596, 596, 615, 597, 615, 616, 597, 597, 616, 598, 616, 617, 598,
    598, 617, 599, 617, 618, 599, 599, 618, 600, 618, 619, 600, 600, 619, 601, 619, 620, 601,
    601, 620, 602, 620, 621, 602, 602, 621, 603, 621, 622, 603, 603, 622, 604, 622, 623, 604,
    604, 623, 605, 623, 624, 605, 605, 624, 606, 624, 625, 606, 606, 625, 607, 625, 626, 607,
    608, 627, 609, 627, 628, 609, 609, 628, 610, 628, 629, 610, 610, 629, 611, 629, 630, 611,
    611, 630, 612, 630, 631, 612, 612, 631, 613, 631, 632, 613, 613, 632, 614, 632, 633, 614,
    614, 633, 615, 633, 634, 615, 615, 634, 616, 634, 635, 616, 616, 635, 617, 635, 636, 617,
    617, 636, 618, 636, 637, 618, 618, 637, 619, 637, 638, 619, 619, 638, 620, 638, 639, 620,
    620, 639, 621, 639, 640, 621, 621, 640, 622, 640, 641, 622, 622, 641, 623, 641, 642, 623,
    623, 642, 624, 642, 643, 624, 624, 643, 625, 643, 644, 625, 625, 644, 626, 644, 645, 626,
    627, 646, 628, 646, 647, 628, 628, 647, 629, 647, 648, 629, 629, 648, 630, 648, 649, 630,
    630, 649, 631, 649, 650, 631, 631, 650, 632, 650, 651, 632, 632, 651, 633, 651, 652, 633,
    633, 652, 634, 652, 653, 634, 634, 653, 635, 653, 654, 635, 635, 654, 636, 654, 655, 636,
    636, 655, 637, 655, 656, 637, 637, 656, 638, 656, 657, 638, 638, 657, 639, 657, 658, 639,
    639, 658, 640, 658, 659, 640, 640, 659, 641, 659, 660, 641, 641, 660, 642, 660, 661, 642,
    642, 661, 643, 661, 662, 643, 643, 662, 644, 662, 663, 644, 644, 663, 645, 663, 664, 645,
    646, 665, 647, 665, 666, 647, 647, 666, 648, 666, 667, 648, 648, 667, 649, 667, 668, 649,
    649, 668, 650, 668, 669, 650, 650, 669, 651, 669, 670, 651, 651, 670, 652, 670, 671, 652,
    652, 671, 653, 671, 672, 653, 653, 672, 654, 672, 673, 654, 654, 673, 655, 673, 674, 655,
    655, 674, 656, 674, 675, 656, 656, 675, 657, 675, 676, 657, 657, 676, 658, 676, 677, 658,
    658, 677, 659, 677, 678, 659, 659, 678, 660, 678, 679, 660, 660, 679, 661, 679, 680, 661,
    661, 680, 662, 680, 681, 662, 662, 681, 663, 681, 682, 663, 663, 682, 664, 682, 683, 664,
    665, 684, 666, 684, 685, 666, 666, 685, 667, 685, 686, 667, 667, 686, 668, 686, 687, 668,
    668, 687, 669, 687, 688, 669, 669, 688, 670, 688, 689, 670, 670, 689, 671, 689, 690, 671,
    671, 690, 672, 690, 691, 672, 672, 691, 673, 691, 692, 673, 673, 692, 674, 692, 693, 674,
    674, 693, 675, 693, 694, 675, 675, 694, 676, 694, 695, 676, 676, 695, 677, 695, 696, 677,
    677, 696, 678, 696, 697, 678, 678, 697, 679, 697, 698, 679, 679, 698, 680, 698, 699, 680,
    680, 699, 681, 699, 700, 681, 681, 700, 682, 700, 701, 682, 682, 701, 683, 701, 702, 683,
];

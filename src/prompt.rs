/// Builds the Gemini prompt for one item. Pure string formatting; the age is
/// embedded both in the instruction and in the example response so the model
/// anchors its assessment on it.
pub fn nutrition_prompt(item_name: &str, age: u64) -> String {
    format!(
        "Sebagai ahli gizi yang dapat memberikan estimasi, berikan informasi gizi esensial \
         (Kalori, Protein, Karbohidrat, Lemak, Serat) untuk '{item_name}'. \
         Jika data spesifik untuk merek atau produk olahan tersebut tidak tersedia, berikan \
         estimasi berdasarkan komposisi umum atau kategori produk serupa. \
         Kemudian, berikan penilaian singkat apakah kandungan gizi item ini baik, cukup, atau \
         kurang baik untuk seseorang dengan usia {age} tahun, berdasarkan Angka Kecukupan Gizi \
         (AKG) umum di Indonesia. \
         Sajikan data nutrisi dalam format JSON di bawah kunci 'nutrisi' dan penilaian gizi \
         dalam teks singkat di bawah kunci 'penilaian'. \
         **Pastikan untuk SELALU memberikan estimasi nilai nutrisi dalam format angka dengan \
         satuan (misal: '150 kcal', '5 g'), bukan 'Tidak tersedia', meskipun itu adalah \
         estimasi.** \
         Jika suatu nutrisi benar-benar tidak signifikan, berikan nilai '0 g' atau '0 kcal'.\n\n\
         Contoh format respons JSON yang diinginkan:\n\
         {{\"nutrisi\": {{\"Kalori\": \"200 kcal\", \"Protein\": \"10 g\", \"Karbohidrat\": \
         \"30 g\", \"Lemak\": \"5 g\", \"Serat\": \"3 g\"}}, \
         \"penilaian\": \"Untuk usia {age} tahun, item ini secara umum baik karena...\"}}\
         Gunakan bahasa Indonesia."
    )
}
